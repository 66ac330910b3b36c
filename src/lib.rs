//! Paramscan - find which Parameter Store entries hold a given value.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── scan          # Wires enumeration and search together
//! │   └── output        # Terminal output, progress bar, report sections
//! └── core/             # Core library components
//!     ├── config        # Store connection settings
//!     ├── pages         # Lazy continuation-token sequence
//!     ├── enumerate     # List parameter metadata by type
//!     ├── search        # Resolve values and compare to the target
//!     └── store/        # Parameter store backends
//!         ├── mod       # ParameterStore trait
//!         ├── ssm       # AWS Systems Manager implementation
//!         └── memory    # In-memory store and JSON snapshots
//! ```
//!
//! The scan is two sequential stages. The enumerator pages through every
//! `String` and `SecureString` parameter; the search stage then reads each
//! value (recursively for `/`-prefixed names) and records the names whose
//! value equals the target. A failure on one parameter is recorded and the
//! scan moves on; a failure while enumerating aborts the whole run.

pub mod cli;
pub mod core;
pub mod error;
