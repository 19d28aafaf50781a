mod config;
mod fpa;

#[doc(inline)]
pub use config::CrescentConfig;
#[doc(inline)]
pub use fpa::FPA;
