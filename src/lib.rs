pub mod clock;
pub mod output;
pub mod progress;
pub mod session;
pub mod store;

pub use crate::clock::{Clock, SystemClock};
pub use crate::output::buffered::BufferedOutput;
pub use crate::output::{Level, Message, QuizOutput};
pub use crate::progress::{FileStore, LoadResult, MemoryStore, ProgressCache, ProgressStore};
pub use crate::session::settings::Settings;
pub use crate::session::{Phase, QuizSession, SessionMode};
pub use crate::store::{Question, QuestionBank, WeekKey};
