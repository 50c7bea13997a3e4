//! Customers service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::customers::{
        data::{CustomerUpdate, NewCustomer, normalize_code, validate_customer},
        errors::CustomersServiceError,
        records::{CustomerRecord, CustomerUuid},
        repository::PgCustomersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCustomersRepository::new(),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let customers = self.repository.list_customers(&mut tx).await?;

        tx.commit().await?;

        Ok(customers)
    }

    async fn get_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let customer = self.repository.get_customer(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(customer)
    }

    async fn find_customer_by_code(
        &self,
        code: &str,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let code = normalize_code(code);

        let mut tx = self.db.begin().await?;

        let customer = self
            .repository
            .find_customer_by_code(&mut tx, &code)
            .await?
            .ok_or(CustomersServiceError::NotFound)?;

        tx.commit().await?;

        Ok(customer)
    }

    async fn create_customer(
        &self,
        mut customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        customer.code = normalize_code(&customer.code);

        validate_customer(&customer.code, &customer.shop_name)?;

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_customer(&mut tx, customer).await?;

        tx.commit().await?;

        info!(customer_uuid = %created.uuid, code = %created.code, "created customer");

        Ok(created)
    }

    async fn update_customer(
        &self,
        customer: CustomerUuid,
        mut update: CustomerUpdate,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        update.code = normalize_code(&update.code);

        validate_customer(&update.code, &update.shop_name)?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_customer(&mut tx, customer, update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_customer(&self, customer: CustomerUuid) -> Result<(), CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_customer(&mut tx, customer).await?;

        if rows_affected == 0 {
            return Err(CustomersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Retrieves all shops.
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError>;

    /// Retrieve a single shop.
    async fn get_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Retrieve a shop by its code. The code is normalized before lookup.
    async fn find_customer_by_code(
        &self,
        code: &str,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Registers a new shop.
    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Replaces a shop's details.
    async fn update_customer(
        &self,
        customer: CustomerUuid,
        update: CustomerUpdate,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Soft-deletes a shop.
    async fn delete_customer(&self, customer: CustomerUuid) -> Result<(), CustomersServiceError>;
}
