pub mod io;
pub mod locate;

pub use io::{atomic_write_str, read_text};
pub use locate::{COMIC_INFO_FILE, FsError, find_comic_info, resolve_comic_info};
