pub use sea_orm_migration::prelude::*;

mod m20220301_000001_expense_types;
mod m20220301_000002_expenses;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220301_000001_expense_types::Migration),
            Box::new(m20220301_000002_expenses::Migration),
        ]
    }
}
