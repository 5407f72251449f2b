use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "discount")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub discount_id: i32,
    /// Percentage, e.g. 19.0 for 19%
    pub discount: f64,
    pub discount_text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::customer_discount::Entity")]
    CustomerDiscount,
}

impl Related<super::customer_discount::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerDiscount.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
