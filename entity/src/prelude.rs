pub use super::test::Entity as Test;
