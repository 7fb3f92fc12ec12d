use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Alerts {
    Table,
    SubscriptionId,
    AlertType,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // one alert per (subscription, type); concurrent passes lose the insert instead of duplicating
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_alerts_subscription_type")
                    .table(Alerts::Table)
                    .col(Alerts::SubscriptionId)
                    .col(Alerts::AlertType)
                    .unique()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_alerts_subscription_type")
                    .table(Alerts::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
