//! Browser binding (JSON over HTTP).

pub mod form;
pub mod provider;
pub mod response;
pub mod session;
pub mod wire;
