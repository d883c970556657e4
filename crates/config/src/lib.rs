//! Site metadata: the title, author and social links a blog's templates read.

mod builtin;
mod format;
mod load;
mod metadata;
mod object;
mod validate;

pub use self::builtin::*;
pub use self::format::*;
pub use self::load::*;
pub use self::metadata::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
