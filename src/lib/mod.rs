//! # Audio Title Core Library
//!
//! Cleans noisy audio filenames into readable titles and plans the matching
//! renames. The heuristic itself lives in [`title`], built on the transforms in
//! [`noise`] and the segment scoring in [`scorer`]. [`plan`] turns a directory
//! listing into a collision-free rename plan that [`mapping`] logs and
//! [`directory`] applies.

pub mod audio;
pub mod config;
pub mod directory;
pub mod mapping;
pub mod noise;
pub mod plan;
pub mod progress;
pub mod scorer;
pub mod title;
pub mod utils;
