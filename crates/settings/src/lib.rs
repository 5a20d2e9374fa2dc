//! Store settings domain module.
//!
//! One singleton record: store identity, contact info, hours, feature
//! toggles, and the open/closed flag. Absence means "use defaults".

pub mod settings;

pub use settings::{SettingsPatch, StoreSettings, WeekHours};
