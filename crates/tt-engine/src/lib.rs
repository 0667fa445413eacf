//! `tt-engine` — schedule combination engine for the timetable workspace.
//!
//! # Enumeration loop
//!
//! ```text
//! total = Π |course.options|               (warn if > warning_threshold)
//! for index, choice in cartesian product (lexicographic, lazily):
//!   ① Limits   : index ≥ max_combinations, or cancel token set → truncated
//!   ② Gate     : tt_core::is_valid(choice), otherwise discard
//!   ③ Rank     : score_with(scorer, choice, weights)
//!   ④ Retain   : TopK::offer keeps the K best by (score, −index)
//! drain TopK → descending RankedResult list
//! ```
//!
//! Peak memory is O(top_k) regardless of how many combinations are valid.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                         |
//! |------------|----------------------------------------------------------------|
//! | `parallel` | Shards the index space over Rayon; per-shard `TopK`s are merged.|
//! | `serde`    | Serde derives on `ScheduleRequest`, `SearchLimits`, responses. |
//!
//! Both paths produce bit-identical output for the same request.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tt_engine::{EngineBuilder, NoopObserver, ScheduleRequest};
//!
//! let request = ScheduleRequest::new(courses, WeightConfig::default());
//! let engine = EngineBuilder::new(request).cancel_token(token).build()?;
//! let response = engine.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod cancel;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod observer;
pub mod request;
pub mod response;
pub mod top_k;


pub use builder::EngineBuilder;
pub use cancel::CancelToken;
pub use cursor::{total_combinations, CombinationCursor};
pub use engine::{generate, Engine, CANCEL_CHECK_INTERVAL};
pub use error::{EngineError, EngineResult};
pub use observer::{EnumerationObserver, NoopObserver};
pub use request::{ScheduleRequest, SearchLimits};
pub use response::{RankedResult, ScheduleResponse, SearchStats};
pub use top_k::{Candidate, TopK};
