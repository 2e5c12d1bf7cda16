//! Status sources.
//!
//! ```text
//!   Registry ──▶ Sampler ──▶ Sources ──▶ FileSystem (trait)
//!                   │                        │
//!             cpu history             ┌──────┴──────┐
//!                                     │             │
//!                                  RealFs        MockFs
//! ```
//!
//! # Testing (with MockFs)
//!
//! ```
//! use rslstatus::collector::{Component, MockFs, Sampler};
//! use rslstatus::registry::{ModuleDescriptor, Registry};
//!
//! let registry = Registry::new(vec![
//!     ModuleDescriptor::new(Component::Hostname, "host %s").unwrap(),
//! ])
//! .unwrap();
//! let mut sampler = Sampler::new(MockFs::typical_laptop(), "/proc", "/sys");
//! let results = sampler.sample_all(&registry);
//! assert_eq!(results[0].text(), "thinkpad");
//! ```

pub mod component;
pub mod mock;
pub mod procfs;
pub mod sampler;
pub mod traits;

pub use component::{CollectError, Component, Sources};
pub use mock::MockFs;
pub use sampler::{SampleResult, Sampler};
pub use traits::{FileSystem, RealFs};
