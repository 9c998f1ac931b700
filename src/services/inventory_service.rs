use chrono::NaiveDate;
use sqlx::PgPool;
use tonic::{Request, Response, Status};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthenticatedUser;
use crate::models::{Category, Family, InventoryItemModel, StockOp};
use crate::policy::{authorize, Action};
use crate::proto::common::Empty;
use crate::proto::inventory::inventory_service_server::InventoryService;
use crate::proto::inventory::{
    CreateItemReq, CreateItemRes, DeleteItemReq, Item, ListItemsReq, ListItemsRes, UpdateItemReq,
    UpdateItemRes, UpdateStockReq, UpdateStockRes,
};
use crate::services::authenticated_user;

const ITEM_COLUMNS: &str = "id, category, family, name, brand, quantity, min_stock_level, \
     expiry_date, supplier_name, supplier_contact, created_at, updated_at";

const DEFAULT_PAGE_SIZE: i32 = 50;
const MAX_PAGE_SIZE: i32 = 200;

/// One service for all five categories: the category arrives as data in
/// every request, so the CRUD and stock logic exists exactly once.
pub struct InventoryServiceImpl {
    pool: PgPool,
}

impl InventoryServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn model_to_proto(model: &InventoryItemModel) -> Item {
        Item {
            id: model.id.to_string(),
            category: model.category.clone(),
            family: model.family.clone().unwrap_or_default(),
            name: model.name.clone(),
            brand: model.brand.clone().unwrap_or_default(),
            quantity: model.quantity,
            min_stock_level: model.min_stock_level,
            expiry_date: model
                .expiry_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            supplier_name: model.supplier_name.clone().unwrap_or_default(),
            supplier_contact: model.supplier_contact.clone().unwrap_or_default(),
            created_at: model.created_at.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
        }
    }

    fn parse_category(s: &str) -> AppResult<Category> {
        Category::parse(s).ok_or_else(|| AppError::Validation(format!("unknown category: {}", s)))
    }

    fn parse_expiry(s: &str) -> AppResult<Option<NaiveDate>> {
        if s.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::Validation("expiry_date must be YYYY-MM-DD".to_string()))
    }

    /// Medications get a generated per-family identifier; everything else
    /// is keyed by its human-readable name.
    fn item_name(category: Category, family: Option<Family>, name: &str) -> AppResult<String> {
        match category {
            Category::Medication => {
                let family = family.ok_or_else(|| {
                    AppError::Validation("family is required for medications".to_string())
                })?;
                let suffix = Uuid::new_v4().simple().to_string();
                Ok(format!("MED-{}-{}", family.code(), &suffix[..8]))
            }
            _ => {
                if name.trim().is_empty() {
                    return Err(AppError::Validation("name is required".to_string()));
                }
                Ok(name.trim().to_string())
            }
        }
    }

    fn validate_stock_request(kind: &str, quantity: i32) -> AppResult<StockOp> {
        let op = StockOp::parse(kind).ok_or_else(|| {
            AppError::Validation("kind must be 'addition' or 'consumption'".to_string())
        })?;
        if quantity <= 0 {
            return Err(AppError::Validation(
                "quantity must be positive".to_string(),
            ));
        }
        Ok(op)
    }

    /// Recorded best-effort: a failed log entry never rolls back the
    /// stock write that already happened.
    async fn append_activity(
        &self,
        auth_user: &AuthenticatedUser,
        action: &str,
        item: &InventoryItemModel,
        delta: i32,
    ) {
        let details = format!("quantity now {}", item.quantity);
        let result = sqlx::query(
            "INSERT INTO activity_log (user_id, action, item_name, quantity_delta, details) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(auth_user.user_id)
        .bind(action)
        .bind(&item.name)
        .bind(delta)
        .bind(&details)
        .execute(&self.pool)
        .await;

        if let Err(e) = result {
            tracing::warn!("activity log append failed for {}: {}", item.name, e);
        }
    }
}

#[tonic::async_trait]
impl InventoryService for InventoryServiceImpl {
    async fn list_items(
        &self,
        request: Request<ListItemsReq>,
    ) -> Result<Response<ListItemsRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        authorize(auth_user.role, Action::ViewInventory)?;
        let req = request.into_inner();

        let category = Self::parse_category(&req.category)?;

        // Build dynamic WHERE clause
        let mut conditions = vec!["category = $1".to_string()];
        let mut param_idx = 2u32;

        let family_filter = if req.family.is_empty() {
            None
        } else {
            let family = Family::parse(&req.family).ok_or_else(|| {
                AppError::Validation(format!("unknown family: {}", req.family))
            })?;
            conditions.push(format!("family = ${}", param_idx));
            param_idx += 1;
            Some(family.as_str())
        };

        let search_filter = if req.search.is_empty() {
            None
        } else {
            conditions.push(format!("name ILIKE ${}", param_idx));
            Some(format!("%{}%", req.search))
        };

        let where_clause = format!("WHERE {}", conditions.join(" AND "));

        let count_sql = format!("SELECT COUNT(*) FROM inventory_items {}", where_clause);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql).bind(category.as_str());
        if let Some(v) = family_filter {
            count_query = count_query.bind(v);
        }
        if let Some(ref v) = search_filter {
            count_query = count_query.bind(v);
        }
        let total: i64 = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let page = req.page.max(1);
        let page_size = if req.page_size <= 0 {
            DEFAULT_PAGE_SIZE
        } else {
            req.page_size.min(MAX_PAGE_SIZE)
        };
        let offset = (page - 1) as i64 * page_size as i64;

        let sql = format!(
            "SELECT {} FROM inventory_items {} ORDER BY name ASC LIMIT {} OFFSET {}",
            ITEM_COLUMNS, where_clause, page_size, offset
        );

        let mut query = sqlx::query_as::<_, InventoryItemModel>(&sql).bind(category.as_str());
        if let Some(v) = family_filter {
            query = query.bind(v);
        }
        if let Some(ref v) = search_filter {
            query = query.bind(v);
        }

        let models: Vec<InventoryItemModel> = query
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let items: Vec<Item> = models.iter().map(Self::model_to_proto).collect();
        Ok(Response::new(ListItemsRes { items, total }))
    }

    async fn create_item(
        &self,
        request: Request<CreateItemReq>,
    ) -> Result<Response<CreateItemRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        authorize(auth_user.role, Action::CreateItem)?;
        let req = request.into_inner();

        let category = Self::parse_category(&req.category)?;
        let family = if req.family.is_empty() {
            None
        } else {
            let family = Family::parse(&req.family).ok_or_else(|| {
                AppError::Validation(format!("unknown family: {}", req.family))
            })?;
            if category != Category::Medication {
                return Err(
                    AppError::Validation("family applies only to medications".to_string()).into(),
                );
            }
            Some(family)
        };

        if req.quantity < 0 {
            return Err(
                AppError::Validation("quantity must not be negative".to_string()).into(),
            );
        }
        if req.min_stock_level < 0 {
            return Err(
                AppError::Validation("min_stock_level must not be negative".to_string()).into(),
            );
        }

        let name = Self::item_name(category, family, &req.name)?;
        let expiry = Self::parse_expiry(&req.expiry_date)?;

        let sql = format!(
            "INSERT INTO inventory_items \
             (category, family, name, brand, quantity, min_stock_level, expiry_date, supplier_name, supplier_contact) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {}",
            ITEM_COLUMNS
        );
        let model: InventoryItemModel = sqlx::query_as(&sql)
            .bind(category.as_str())
            .bind(family.map(|f| f.as_str()))
            .bind(&name)
            .bind((!req.brand.is_empty()).then_some(req.brand.as_str()))
            .bind(req.quantity)
            .bind(req.min_stock_level)
            .bind(expiry)
            .bind((!req.supplier_name.is_empty()).then_some(req.supplier_name.as_str()))
            .bind((!req.supplier_contact.is_empty()).then_some(req.supplier_contact.as_str()))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if e.to_string().contains("unique") || e.to_string().contains("duplicate") {
                    AppError::Conflict(
                        "An item with this name already exists in this category".to_string(),
                    )
                } else {
                    AppError::Database(e)
                }
            })?;

        tracing::info!("created {} item {}", model.category, model.name);

        Ok(Response::new(CreateItemRes {
            item: Some(Self::model_to_proto(&model)),
        }))
    }

    async fn update_item(
        &self,
        request: Request<UpdateItemReq>,
    ) -> Result<Response<UpdateItemRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        authorize(auth_user.role, Action::UpdateItem)?;
        let req = request.into_inner();

        let category = Self::parse_category(&req.category)?;
        if req.name.is_empty() {
            return Err(AppError::Validation("name is required".to_string()).into());
        }
        if req.quantity < 0 {
            return Err(
                AppError::Validation("quantity must not be negative".to_string()).into(),
            );
        }
        if req.min_stock_level < 0 {
            return Err(
                AppError::Validation("min_stock_level must not be negative".to_string()).into(),
            );
        }
        let expiry = Self::parse_expiry(&req.expiry_date)?;

        let sql = format!(
            "UPDATE inventory_items SET brand = $1, quantity = $2, min_stock_level = $3, \
             expiry_date = $4, supplier_name = $5, supplier_contact = $6, updated_at = NOW() \
             WHERE category = $7 AND name = $8 RETURNING {}",
            ITEM_COLUMNS
        );
        let model: Option<InventoryItemModel> = sqlx::query_as(&sql)
            .bind((!req.brand.is_empty()).then_some(req.brand.as_str()))
            .bind(req.quantity)
            .bind(req.min_stock_level)
            .bind(expiry)
            .bind((!req.supplier_name.is_empty()).then_some(req.supplier_name.as_str()))
            .bind((!req.supplier_contact.is_empty()).then_some(req.supplier_contact.as_str()))
            .bind(category.as_str())
            .bind(&req.name)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        match model {
            Some(m) => Ok(Response::new(UpdateItemRes {
                item: Some(Self::model_to_proto(&m)),
            })),
            None => Err(AppError::NotFound("Item not found".to_string()).into()),
        }
    }

    async fn update_stock(
        &self,
        request: Request<UpdateStockReq>,
    ) -> Result<Response<UpdateStockRes>, Status> {
        let auth_user = authenticated_user(&request)?;
        let req = request.into_inner();

        let category = Self::parse_category(&req.category)?;
        if req.name.is_empty() {
            return Err(AppError::Validation("name is required".to_string()).into());
        }
        let op = Self::validate_stock_request(&req.kind, req.quantity)?;

        // Role gate fires before any store access.
        let action = match op {
            StockOp::Addition => Action::StockAddition,
            StockOp::Consumption => Action::StockConsumption,
        };
        authorize(auth_user.role, action)?;

        let delta = op.delta(req.quantity);

        // Single conditional update: two concurrent consumptions can never
        // drive the quantity below zero.
        let sql = format!(
            "UPDATE inventory_items SET quantity = quantity + $1, updated_at = NOW() \
             WHERE category = $2 AND name = $3 AND quantity + $1 >= 0 RETURNING {}",
            ITEM_COLUMNS
        );
        let model: Option<InventoryItemModel> = sqlx::query_as(&sql)
            .bind(delta)
            .bind(category.as_str())
            .bind(&req.name)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        match model {
            Some(m) => {
                self.append_activity(&auth_user, op.as_str(), &m, delta).await;
                Ok(Response::new(UpdateStockRes {
                    item: Some(Self::model_to_proto(&m)),
                }))
            }
            None => {
                let exists: bool = sqlx::query_scalar(
                    "SELECT EXISTS(SELECT 1 FROM inventory_items WHERE category = $1 AND name = $2)",
                )
                .bind(category.as_str())
                .bind(&req.name)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

                if exists {
                    Err(AppError::Validation(
                        "insufficient stock for consumption".to_string(),
                    )
                    .into())
                } else {
                    Err(AppError::NotFound("Item not found".to_string()).into())
                }
            }
        }
    }

    async fn delete_item(
        &self,
        request: Request<DeleteItemReq>,
    ) -> Result<Response<Empty>, Status> {
        let auth_user = authenticated_user(&request)?;
        authorize(auth_user.role, Action::DeleteItem)?;
        let req = request.into_inner();

        let category = Self::parse_category(&req.category)?;
        if req.name.is_empty() {
            return Err(AppError::Validation("name is required".to_string()).into());
        }

        let rows_affected =
            sqlx::query("DELETE FROM inventory_items WHERE category = $1 AND name = $2")
                .bind(category.as_str())
                .bind(&req.name)
                .execute(&self.pool)
                .await
                .map_err(AppError::Database)?
                .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::NotFound("Item not found".to_string()).into());
        }

        tracing::info!("deleted {} item {}", req.category, req.name);

        Ok(Response::new(Empty {}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_request_validation() {
        assert_eq!(
            InventoryServiceImpl::validate_stock_request("addition", 5).unwrap(),
            StockOp::Addition
        );
        assert_eq!(
            InventoryServiceImpl::validate_stock_request("consumption", 1).unwrap(),
            StockOp::Consumption
        );
        assert!(InventoryServiceImpl::validate_stock_request("consumption", 0).is_err());
        assert!(InventoryServiceImpl::validate_stock_request("consumption", -3).is_err());
        assert!(InventoryServiceImpl::validate_stock_request("transfer", 5).is_err());
    }

    #[test]
    fn test_medication_identifier_is_generated() {
        let name =
            InventoryServiceImpl::item_name(Category::Medication, Some(Family::Family2), "ignored")
                .unwrap();
        assert!(name.starts_with("MED-F2-"));
        assert_eq!(name.len(), "MED-F2-".len() + 8);

        // Two calls never collide on the same family.
        let other =
            InventoryServiceImpl::item_name(Category::Medication, Some(Family::Family2), "")
                .unwrap();
        assert_ne!(name, other);
    }

    #[test]
    fn test_medication_requires_family() {
        assert!(InventoryServiceImpl::item_name(Category::Medication, None, "x").is_err());
    }

    #[test]
    fn test_named_categories_require_name() {
        assert!(InventoryServiceImpl::item_name(Category::Instrument, None, "  ").is_err());
        assert_eq!(
            InventoryServiceImpl::item_name(Category::Inox, None, " Tray ").unwrap(),
            "Tray"
        );
    }

    #[test]
    fn test_expiry_parsing() {
        assert_eq!(InventoryServiceImpl::parse_expiry("").unwrap(), None);
        assert_eq!(
            InventoryServiceImpl::parse_expiry("2026-09-01").unwrap(),
            Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        );
        assert!(InventoryServiceImpl::parse_expiry("01/09/2026").is_err());
    }
}
