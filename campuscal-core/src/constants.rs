//! Feed-level metadata for the generated calendar.

/// PRODID emitted at the top of every generated feed.
pub const FEED_PRODID: &str = "-//UFSCar Calendar//UFSCar//";

/// Display name of the feed (X-WR-CALNAME).
pub const FEED_NAME: &str = "UFSCar Calendar";

/// All event timestamps are anchored to this timezone; nothing downstream
/// converts them.
pub const FEED_TIMEZONE: &str = "America/Sao_Paulo";

/// LOCATION property attached to every event.
pub const FEED_LOCATION: &str = "UFSCar - São Carlos";
