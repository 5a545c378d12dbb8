pub use referencing_codegen::suite;
pub use referencing_internal::{Case, InnerTest, Test};
