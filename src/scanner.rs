//! Periodic alert scanner: walks all medication records, classifies
//! low-stock and near-expiry conditions, and fans out deduplicated
//! notifications to department admins. A daily sweep removes read
//! notifications older than 30 days.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use tokio::time::interval;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::NotificationKind;

/// Quantity at or below which stock is critical regardless of the
/// per-item minimum.
const CRITICAL_STOCK_FLOOR: i32 = 5;
const EXPIRY_CRITICAL_DAYS: i64 = 7;
const EXPIRY_NEAR_DAYS: i64 = 30;

/// Cadence of the purge sweep for old read notifications.
const PURGE_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub items_scanned: usize,
    pub notifications_created: u64,
    pub deduplicated: u64,
    pub failures: usize,
}

#[derive(Debug, sqlx::FromRow)]
struct MedicationRow {
    name: String,
    quantity: i32,
    min_stock_level: i32,
    expiry_date: Option<NaiveDate>,
}

/// Whole days until expiry, rounded up. Zero or negative means the
/// expiry date has passed.
pub fn days_until(expiry: NaiveDate, now: DateTime<Utc>) -> i64 {
    let expiry_midnight = expiry
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc();
    let secs = (expiry_midnight - now).num_seconds();
    secs.div_euclid(86_400) + if secs.rem_euclid(86_400) > 0 { 1 } else { 0 }
}

pub fn classify_stock(quantity: i32, min_stock_level: i32) -> Option<NotificationKind> {
    if quantity <= CRITICAL_STOCK_FLOOR {
        Some(NotificationKind::StockCritical)
    } else if quantity <= min_stock_level {
        Some(NotificationKind::StockLow)
    } else {
        None
    }
}

pub fn classify_expiry(days: i64) -> Option<NotificationKind> {
    if days <= 0 {
        Some(NotificationKind::Expired)
    } else if days <= EXPIRY_CRITICAL_DAYS {
        Some(NotificationKind::ExpiryCritical)
    } else if days <= EXPIRY_NEAR_DAYS {
        Some(NotificationKind::ExpiryNear)
    } else {
        None
    }
}

fn alert_text(kind: NotificationKind, row: &MedicationRow, days: i64) -> (String, String) {
    match kind {
        NotificationKind::StockCritical => (
            format!("Critical stock: {}", row.name),
            format!(
                "Only {} left in stock (critical threshold is {})",
                row.quantity, CRITICAL_STOCK_FLOOR
            ),
        ),
        NotificationKind::StockLow => (
            format!("Low stock: {}", row.name),
            format!(
                "{} in stock, at or below the minimum of {}",
                row.quantity, row.min_stock_level
            ),
        ),
        NotificationKind::Expired => (
            format!("Expired: {}", row.name),
            match row.expiry_date {
                Some(d) => format!("Expired on {}", d.format("%Y-%m-%d")),
                None => "Expired".to_string(),
            },
        ),
        NotificationKind::ExpiryCritical | NotificationKind::ExpiryNear => (
            format!("Expires soon: {}", row.name),
            match row.expiry_date {
                Some(d) => format!("Expires in {} days ({})", days, d.format("%Y-%m-%d")),
                None => format!("Expires in {} days", days),
            },
        ),
    }
}

/// Insert one notification unless an unread one for the same
/// (recipient, item, kind) triple was created within the last 24 hours.
/// Returns true when a row was actually inserted.
async fn notify_deduped(
    pool: &PgPool,
    recipient: Uuid,
    row: &MedicationRow,
    kind: NotificationKind,
    days: i64,
) -> Result<bool, sqlx::Error> {
    let (title, message) = alert_text(kind, row, days);

    let rows_affected = sqlx::query(
        "INSERT INTO notifications \
         (recipient_id, title, message, kind, priority, item_category, item_name) \
         SELECT $1, $2, $3, $4, $5, 'medication', $6 \
         WHERE NOT EXISTS ( \
             SELECT 1 FROM notifications \
             WHERE recipient_id = $1 AND item_category = 'medication' AND item_name = $6 \
               AND kind = $4 AND read = FALSE \
               AND created_at > NOW() - INTERVAL '24 hours')",
    )
    .bind(recipient)
    .bind(&title)
    .bind(&message)
    .bind(kind.as_str())
    .bind(kind.priority().as_str())
    .bind(&row.name)
    .execute(pool)
    .await?
    .rows_affected();

    Ok(rows_affected > 0)
}

async fn scan_item(
    pool: &PgPool,
    recipients: &[Uuid],
    row: &MedicationRow,
    now: DateTime<Utc>,
) -> Result<(u64, u64), sqlx::Error> {
    let mut conditions = Vec::new();

    if let Some(kind) = classify_stock(row.quantity, row.min_stock_level) {
        conditions.push((kind, 0));
    }
    if let Some(expiry) = row.expiry_date {
        let days = days_until(expiry, now);
        if let Some(kind) = classify_expiry(days) {
            conditions.push((kind, days));
        }
    }

    let mut created = 0;
    let mut deduplicated = 0;
    for (kind, days) in conditions {
        for recipient in recipients {
            if notify_deduped(pool, *recipient, row, kind, days).await? {
                created += 1;
            } else {
                tracing::debug!(
                    "dedup: {} {} for recipient {} already notified",
                    row.name,
                    kind.as_str(),
                    recipient
                );
                deduplicated += 1;
            }
        }
    }
    Ok((created, deduplicated))
}

/// One full pass over the medication records. A failure on one item is
/// logged and the pass moves on to the next item.
pub async fn run_scan(pool: &PgPool) -> AppResult<ScanOutcome> {
    let now = Utc::now();

    let recipients: Vec<Uuid> = sqlx::query_scalar(
        "SELECT id FROM users WHERE role = 'department_admin' AND status = 'active'",
    )
    .fetch_all(pool)
    .await?;

    if recipients.is_empty() {
        tracing::info!("alert scan: no active department admins, nothing to notify");
        return Ok(ScanOutcome::default());
    }

    let rows: Vec<MedicationRow> = sqlx::query_as(
        "SELECT name, quantity, min_stock_level, expiry_date \
         FROM inventory_items WHERE category = 'medication'",
    )
    .fetch_all(pool)
    .await?;

    let mut outcome = ScanOutcome {
        items_scanned: rows.len(),
        ..Default::default()
    };

    for row in &rows {
        match scan_item(pool, &recipients, row, now).await {
            Ok((created, deduplicated)) => {
                outcome.notifications_created += created;
                outcome.deduplicated += deduplicated;
            }
            Err(e) => {
                tracing::error!("alert scan failed for item {}: {}", row.name, e);
                outcome.failures += 1;
            }
        }
    }

    tracing::info!(
        "alert scan done: {} items, {} notifications created, {} deduplicated, {} failures",
        outcome.items_scanned,
        outcome.notifications_created,
        outcome.deduplicated,
        outcome.failures
    );

    Ok(outcome)
}

/// Permanently delete read notifications older than 30 days.
pub async fn purge_read_notifications(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let rows_affected = sqlx::query(
        "DELETE FROM notifications WHERE read = TRUE AND created_at < NOW() - INTERVAL '30 days'",
    )
    .execute(pool)
    .await?
    .rows_affected();

    if rows_affected > 0 {
        tracing::info!("purged {} read notifications older than 30 days", rows_affected);
    }
    Ok(rows_affected)
}

/// Scheduler loop: scans every `scan_interval`, purges daily. A scan
/// that outlives the interval is not stacked; the next tick is skipped
/// while the previous run is in flight.
pub async fn start_scanner(pool: PgPool, scan_interval: Duration) {
    let running = Arc::new(AtomicBool::new(false));
    let mut scan_tick = interval(scan_interval);
    let mut purge_tick = interval(PURGE_INTERVAL);

    loop {
        tokio::select! {
            _ = scan_tick.tick() => {
                if running.swap(true, Ordering::SeqCst) {
                    tracing::warn!("previous alert scan still running, skipping this cycle");
                    continue;
                }
                let pool = pool.clone();
                let running = running.clone();
                tokio::spawn(async move {
                    if let Err(e) = run_scan(&pool).await {
                        tracing::error!("alert scan aborted: {}", e);
                    }
                    running.store(false, Ordering::SeqCst);
                });
            }
            _ = purge_tick.tick() => {
                if let Err(e) = purge_read_notifications(&pool).await {
                    tracing::error!("notification purge failed: {}", e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 24, 10, 30, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_stock_critical_beats_low() {
        // At or below 5 is critical even when the minimum is higher.
        assert_eq!(classify_stock(5, 10), Some(NotificationKind::StockCritical));
        assert_eq!(classify_stock(0, 10), Some(NotificationKind::StockCritical));
        assert_eq!(classify_stock(6, 10), Some(NotificationKind::StockLow));
        assert_eq!(classify_stock(10, 10), Some(NotificationKind::StockLow));
        assert_eq!(classify_stock(11, 10), None);
    }

    #[test]
    fn test_stock_above_thresholds_is_quiet() {
        assert_eq!(classify_stock(7, 5), None);
        assert_eq!(classify_stock(100, 20), None);
    }

    #[test]
    fn test_days_until_rounds_up() {
        // Five calendar days out, partway through today: ceiling is 5.
        assert_eq!(days_until(date(2026, 8, 29), now()), 5);
        assert_eq!(days_until(date(2026, 8, 25), now()), 1);
        // Today's midnight already passed.
        assert!(days_until(date(2026, 8, 24), now()) <= 0);
        assert!(days_until(date(2026, 8, 20), now()) < 0);
    }

    #[test]
    fn test_five_days_out_is_critical_not_near() {
        let days = days_until(date(2026, 8, 29), now());
        assert_eq!(classify_expiry(days), Some(NotificationKind::ExpiryCritical));
    }

    #[test]
    fn test_expiry_boundaries() {
        assert_eq!(classify_expiry(0), Some(NotificationKind::Expired));
        assert_eq!(classify_expiry(-3), Some(NotificationKind::Expired));
        assert_eq!(classify_expiry(1), Some(NotificationKind::ExpiryCritical));
        assert_eq!(classify_expiry(7), Some(NotificationKind::ExpiryCritical));
        assert_eq!(classify_expiry(8), Some(NotificationKind::ExpiryNear));
        assert_eq!(classify_expiry(30), Some(NotificationKind::ExpiryNear));
        assert_eq!(classify_expiry(31), None);
    }

    #[test]
    fn test_alert_text_mentions_quantities() {
        let row = MedicationRow {
            name: "MED-F1-abcd1234".to_string(),
            quantity: 4,
            min_stock_level: 5,
            expiry_date: None,
        };
        let (title, message) = alert_text(NotificationKind::StockCritical, &row, 0);
        assert!(title.contains("MED-F1-abcd1234"));
        assert!(message.contains('4'));
    }
}
