pub mod journal_log;
pub mod saved_list;

pub use journal_log::JournalLog;
pub use saved_list::SavedList;
