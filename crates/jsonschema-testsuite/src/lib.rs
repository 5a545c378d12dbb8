pub use codegen::suite;
pub use internal::{Case, InnerTest, Test};
