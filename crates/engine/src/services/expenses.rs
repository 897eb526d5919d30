use std::sync::Arc;

use crate::{
    AddExpenseCmd, EngineError, Expense, Money, ResultEngine, SearchInPeriodCmd,
    repository::{ExpenseRepository, ExpenseTypeRepository},
};

use super::unexpected;

#[derive(Clone)]
pub struct ExpenseService {
    expenses: Arc<dyn ExpenseRepository>,
    expense_types: Arc<dyn ExpenseTypeRepository>,
}

impl ExpenseService {
    pub fn new(
        expenses: Arc<dyn ExpenseRepository>,
        expense_types: Arc<dyn ExpenseTypeRepository>,
    ) -> Self {
        Self {
            expenses,
            expense_types,
        }
    }

    /// Record an expense against an existing expense type.
    ///
    /// Returns [`EngineError::InvalidExpenseType`] when the referenced type
    /// does not exist.
    pub async fn add(&self, cmd: AddExpenseCmd) -> ResultEngine<Expense> {
        let expense_type = self
            .expense_types
            .get_by_id(cmd.expense_type_id())
            .await
            .map_err(|err| unexpected("expenses.add.get_expense_type", err))?
            .ok_or(EngineError::InvalidExpenseType)?;

        let amount = Money::new(cmd.amount(), cmd.currency())
            .map_err(|err| EngineError::InvalidDomainModel(err.to_string()))?;
        let expense = Expense::new(
            amount,
            cmd.expense_date(),
            cmd.description().map(ToString::to_string),
            expense_type,
        )?;

        self.expenses
            .add(&expense)
            .await
            .map_err(|err| unexpected("expenses.add", err))?;

        tracing::debug!(id = %expense.id(), amount = %expense.amount(), "expense created");
        Ok(expense)
    }

    pub async fn search_in_period(&self, cmd: SearchInPeriodCmd) -> ResultEngine<Vec<Expense>> {
        let expenses = self
            .expenses
            .search_in_period(cmd.start(), cmd.end())
            .await
            .map_err(|err| unexpected("expenses.search_in_period", err))?;

        tracing::debug!(
            start = %cmd.start(),
            end = %cmd.end(),
            found = expenses.len(),
            "expenses searched"
        );
        Ok(expenses)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::ExpenseType;

    fn db_error(message: &str) -> EngineError {
        EngineError::Database(sea_orm::DbErr::Custom(message.to_string()))
    }

    struct FixedTypes(Option<ExpenseType>);

    struct BrokenTypes;

    #[async_trait]
    impl ExpenseTypeRepository for FixedTypes {
        async fn add(&self, _: &ExpenseType) -> ResultEngine<()> {
            Ok(())
        }

        async fn get_by_id(&self, id: Uuid) -> ResultEngine<Option<ExpenseType>> {
            Ok(self.0.clone().filter(|t| t.id() == id))
        }

        async fn get_by_name(&self, _: &str) -> ResultEngine<Option<ExpenseType>> {
            Ok(None)
        }

        async fn get_all(&self) -> ResultEngine<Vec<ExpenseType>> {
            Ok(self.0.iter().cloned().collect())
        }
    }

    #[async_trait]
    impl ExpenseTypeRepository for BrokenTypes {
        async fn add(&self, _: &ExpenseType) -> ResultEngine<()> {
            Err(db_error("lookup failed"))
        }

        async fn get_by_id(&self, _: Uuid) -> ResultEngine<Option<ExpenseType>> {
            Err(db_error("lookup failed"))
        }

        async fn get_by_name(&self, _: &str) -> ResultEngine<Option<ExpenseType>> {
            Err(db_error("lookup failed"))
        }

        async fn get_all(&self) -> ResultEngine<Vec<ExpenseType>> {
            Err(db_error("lookup failed"))
        }
    }

    #[derive(Default)]
    struct MemoryExpenses {
        rows: Mutex<Vec<Expense>>,
        broken: bool,
    }

    #[async_trait]
    impl ExpenseRepository for MemoryExpenses {
        async fn add(&self, expense: &Expense) -> ResultEngine<()> {
            if self.broken {
                return Err(db_error("insert failed"));
            }
            self.rows.lock().unwrap().push(expense.clone());
            Ok(())
        }

        async fn search_in_period(
            &self,
            start: NaiveDate,
            end: NaiveDate,
        ) -> ResultEngine<Vec<Expense>> {
            if self.broken {
                return Err(db_error("select failed"));
            }
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.expense_date() >= start && e.expense_date() <= end)
                .cloned()
                .collect())
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 3, day).unwrap()
    }

    fn service(expense_type: &ExpenseType, expenses: MemoryExpenses) -> ExpenseService {
        ExpenseService::new(
            Arc::new(expenses),
            Arc::new(FixedTypes(Some(expense_type.clone()))),
        )
    }

    #[tokio::test]
    async fn add_echoes_the_new_expense() {
        let delivery = ExpenseType::new("Delivery").unwrap();
        let service = service(&delivery, MemoryExpenses::default());

        let cmd = AddExpenseCmd::new(100.2, "ARS", date(15), Some("Lomitos"), delivery.id())
            .unwrap();
        let expense = service.add(cmd).await.unwrap();

        assert!(!expense.id().is_nil());
        assert_eq!(expense.amount().amount(), 100.2);
        assert_eq!(expense.amount().currency_code(), "ARS");
        assert_eq!(expense.description(), Some("Lomitos"));
        assert_eq!(expense.expense_type(), &delivery);
    }

    #[tokio::test]
    async fn add_with_unknown_type_is_invalid_expense_type() {
        let delivery = ExpenseType::new("Delivery").unwrap();
        let service = service(&delivery, MemoryExpenses::default());

        let cmd = AddExpenseCmd::new(1.0, "ARS", date(15), None, Uuid::new_v4()).unwrap();
        let err = service.add(cmd).await.unwrap_err();

        assert_eq!(err, EngineError::InvalidExpenseType);
        assert_eq!(err.to_string(), "the expense type doesn't exists");
    }

    #[tokio::test]
    async fn add_with_unknown_currency_is_invalid_domain_model() {
        let delivery = ExpenseType::new("Delivery").unwrap();
        let service = service(&delivery, MemoryExpenses::default());

        let cmd = AddExpenseCmd::new(1.0, "ZZZ", date(15), None, delivery.id()).unwrap();
        assert!(matches!(
            service.add(cmd).await,
            Err(EngineError::InvalidDomainModel(_))
        ));
    }

    #[tokio::test]
    async fn insert_failure_is_unexpected() {
        let delivery = ExpenseType::new("Delivery").unwrap();
        let service = service(
            &delivery,
            MemoryExpenses {
                broken: true,
                ..MemoryExpenses::default()
            },
        );

        let cmd = AddExpenseCmd::new(1.0, "ARS", date(15), None, delivery.id()).unwrap();
        assert_eq!(
            service.add(cmd).await,
            Err(EngineError::Unexpected("Custom Error: insert failed".to_string()))
        );
    }

    #[tokio::test]
    async fn search_in_period_with_no_rows_is_empty() {
        let delivery = ExpenseType::new("Delivery").unwrap();
        let service = service(&delivery, MemoryExpenses::default());

        let found = service
            .search_in_period(SearchInPeriodCmd::new(date(1), date(31)).unwrap())
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn add_when_type_lookup_fails_is_unexpected() {
        let service = ExpenseService::new(
            Arc::new(MemoryExpenses::default()),
            Arc::new(BrokenTypes),
        );

        let cmd = AddExpenseCmd::new(1.0, "ARS", date(15), None, Uuid::new_v4()).unwrap();
        assert_eq!(
            service.add(cmd).await,
            Err(EngineError::Unexpected("Custom Error: lookup failed".to_string()))
        );
    }

    #[tokio::test]
    async fn search_failure_is_unexpected() {
        let delivery = ExpenseType::new("Delivery").unwrap();
        let service = service(
            &delivery,
            MemoryExpenses {
                broken: true,
                ..MemoryExpenses::default()
            },
        );

        let cmd = SearchInPeriodCmd::new(date(1), date(31)).unwrap();
        assert_eq!(
            service.search_in_period(cmd).await,
            Err(EngineError::Unexpected("Custom Error: select failed".to_string()))
        );
    }
}
