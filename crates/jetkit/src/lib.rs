//! # jetkit
//!
//! Bookkeeping utilities for jet-substructure analysis workflows: the
//! un-glamorous layer between a YAML-configured analysis pass and the
//! framework that does the actual histogramming. Nothing here touches a
//! histogram; this crate finds input files, allocates collision-free object
//! names, carries open-ended per-observable settings, computes bin edges,
//! and parses the analysis configuration.
//!
//! The library is UI agnostic: functions take regular Rust values and
//! return `Result`s, and nothing assumes a terminal — except [`spin`],
//! whose whole contract is terminal output, and even that is generic over
//! `io::Write` so tests can capture it. The `jetkit` binary in this
//! workspace is a thin clap front end over these modules.
//!
//! ## Module overview
//!
//! - [`files`]: recursive file discovery with glob filtering
//! - [`naming`]: collision-free name registry, injectable or process-wide
//! - [`attrs`]: tagged attribute values and named attribute bags
//! - [`bins`]: log- and linear-spaced bin-edge generation
//! - [`spin`]: shared-cursor console spinner
//! - [`config`]: the YAML analysis-configuration surface
//! - [`error`]: error types

pub mod attrs;
pub mod bins;
pub mod config;
pub mod error;
pub mod files;
pub mod naming;
pub mod spin;

pub use attrs::{AttrBag, AttrKind, AttrValue, Configurable};
pub use config::AnalysisConfig;
pub use error::{JetkitError, Result};
pub use files::{find_files, find_files_observed};
pub use naming::{unique_name, NameRegistry};
