mod de;
mod envelope;
mod record;
mod settings;
mod stats;
mod zone;

pub use envelope::*;
pub use record::*;
pub use settings::*;
pub use stats::*;
pub use zone::*;
