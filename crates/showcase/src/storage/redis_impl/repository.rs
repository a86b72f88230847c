//! Redis repository implementation for orders and line items.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::AsyncCommands;

use showcase_core::orders::{
    EntityId, LineItem, LineItemId, Order, OrderId, LINE_ITEMS_KEYSPACE, ORDERS_KEYSPACE,
};
use showcase_core::storage::{
    entity_key, hash_to_line_item, hash_to_order_record, index_key, index_tracking_key,
    line_item_index_keys, line_item_to_hash, order_index_keys, order_to_hash, LineItemRepository,
    OrderRecord, OrderRepository, RepositoryError, Result, LINE_ITEM_ORDER_ID_FIELD,
    ORDER_WHEN_FIELD,
};

use super::error::map_redis_error;

/// Redis storage backend for orders and line items.
pub struct RedisRepository {
    conn: redis::aio::ConnectionManager,
}

impl RedisRepository {
    pub fn new(conn: redis::aio::ConnectionManager) -> Self {
        Self { conn }
    }

    /// Replaces an entity's hash and moves its index memberships in one
    /// `MULTI`/`EXEC` block.
    async fn save_entity(
        &self,
        keyspace: &str,
        id: EntityId,
        fields: &[(String, String)],
        index_keys: &[String],
    ) -> Result<()> {
        let mut conn = self.conn.clone();
        let key = entity_key(keyspace, id);
        let tracking_key = index_tracking_key(keyspace, id);
        let member = id.get();

        let stale_indexes: Vec<String> = conn
            .smembers(&tracking_key)
            .await
            .map_err(map_redis_error)?;

        let mut pipe = redis::pipe();
        pipe.atomic();
        pipe.del(&key).ignore();
        pipe.hset_multiple(&key, fields).ignore();
        pipe.sadd(keyspace, member).ignore();
        for stale in &stale_indexes {
            pipe.srem(stale, member).ignore();
        }
        pipe.del(&tracking_key).ignore();
        for index in index_keys {
            pipe.sadd(index, member).ignore();
            pipe.sadd(&tracking_key, index).ignore();
        }

        let _: () = pipe.query_async(&mut conn).await.map_err(map_redis_error)?;

        tracing::debug!(keyspace, %id, indexes = index_keys.len(), "Saved entity");
        Ok(())
    }

    /// Reads an entity hash; a missing key reads as an empty hash.
    async fn load_hash(&self, keyspace: &str, id: EntityId) -> Result<Option<HashMap<String, String>>> {
        let mut conn = self.conn.clone();
        let hash: HashMap<String, String> = conn
            .hgetall(entity_key(keyspace, id))
            .await
            .map_err(map_redis_error)?;
        Ok((!hash.is_empty()).then_some(hash))
    }

    /// Returns the ids listed in an index set, ascending.
    async fn indexed_ids(&self, index: &str) -> Result<Vec<EntityId>> {
        let mut conn = self.conn.clone();
        let members: Vec<String> = conn.smembers(index).await.map_err(map_redis_error)?;

        let mut ids = members
            .iter()
            .map(|member| {
                member.parse::<EntityId>().map_err(|_| {
                    RepositoryError::InvalidData(format!("Invalid id {} in {}", member, index))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        ids.sort();
        Ok(ids)
    }

    async fn delete_entity(&self, keyspace: &str, id: EntityId) -> Result<()> {
        let mut conn = self.conn.clone();
        let tracking_key = index_tracking_key(keyspace, id);
        let member = id.get();

        let indexes: Vec<String> = conn
            .smembers(&tracking_key)
            .await
            .map_err(map_redis_error)?;

        let mut pipe = redis::pipe();
        pipe.atomic();
        pipe.del(entity_key(keyspace, id)).ignore();
        pipe.srem(keyspace, member).ignore();
        for index in &indexes {
            pipe.srem(index, member).ignore();
        }
        pipe.del(&tracking_key).ignore();

        let _: () = pipe.query_async(&mut conn).await.map_err(map_redis_error)?;

        tracing::debug!(keyspace, %id, "Deleted entity");
        Ok(())
    }

    /// Resolves line item references, skipping ones that no longer exist.
    async fn resolve(&self, record: OrderRecord) -> Result<Order> {
        let mut items = Vec::with_capacity(record.line_item_ids.len());
        for item_id in &record.line_item_ids {
            match self.get_line_item(*item_id).await? {
                Some(item) => items.push(item),
                None => {
                    tracing::warn!(order_id = %record.id, line_item_id = %item_id, "Dangling line item reference");
                }
            }
        }
        Ok(record.into_order(items))
    }
}

#[async_trait]
impl LineItemRepository for RedisRepository {
    async fn save_line_item(&self, item: &LineItem) -> Result<()> {
        self.save_entity(
            LINE_ITEMS_KEYSPACE,
            item.id,
            &line_item_to_hash(item),
            &line_item_index_keys(item),
        )
        .await
    }

    async fn get_line_item(&self, id: LineItemId) -> Result<Option<LineItem>> {
        match self.load_hash(LINE_ITEMS_KEYSPACE, id).await? {
            Some(hash) => hash_to_line_item(&hash).map(Some),
            None => Ok(None),
        }
    }

    async fn find_line_items_by_order_id(&self, order_id: OrderId) -> Result<Vec<LineItem>> {
        let index = index_key(
            LINE_ITEMS_KEYSPACE,
            LINE_ITEM_ORDER_ID_FIELD,
            &order_id.to_string(),
        );

        let mut items = Vec::new();
        for id in self.indexed_ids(&index).await? {
            if let Some(item) = self.get_line_item(id).await? {
                items.push(item);
            }
        }
        Ok(items)
    }

    async fn delete_line_item(&self, id: LineItemId) -> Result<()> {
        self.delete_entity(LINE_ITEMS_KEYSPACE, id).await
    }
}

#[async_trait]
impl OrderRepository for RedisRepository {
    async fn save_order(&self, order: &Order) -> Result<()> {
        self.save_entity(
            ORDERS_KEYSPACE,
            order.id,
            &order_to_hash(order),
            &order_index_keys(order),
        )
        .await
    }

    async fn get_order(&self, id: OrderId) -> Result<Option<Order>> {
        let Some(hash) = self.load_hash(ORDERS_KEYSPACE, id).await? else {
            return Ok(None);
        };
        let record = hash_to_order_record(&hash)?;
        self.resolve(record).await.map(Some)
    }

    async fn find_orders_by_when(&self, when: DateTime<Utc>) -> Result<Vec<Order>> {
        let index = index_key(
            ORDERS_KEYSPACE,
            ORDER_WHEN_FIELD,
            &when.timestamp_millis().to_string(),
        );

        let mut orders = Vec::new();
        for id in self.indexed_ids(&index).await? {
            match self.get_order(id).await? {
                Some(order) => orders.push(order),
                None => tracing::warn!(order_id = %id, %index, "Stale index entry"),
            }
        }
        Ok(orders)
    }

    async fn delete_order(&self, id: OrderId) -> Result<()> {
        self.delete_entity(ORDERS_KEYSPACE, id).await
    }

    async fn count_orders(&self) -> Result<usize> {
        let mut conn = self.conn.clone();
        conn.scard(ORDERS_KEYSPACE).await.map_err(map_redis_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use showcase_core::orders::IdGenerator;
    use uuid::Uuid;

    use crate::storage::RedisIdGenerator;

    async fn get_test_connection() -> Option<redis::aio::ConnectionManager> {
        let url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let client = redis::Client::open(url).ok()?;
        tokio::time::timeout(
            Duration::from_secs(2),
            redis::aio::ConnectionManager::new(client),
        )
        .await
        .ok()?
        .ok()
    }

    /// A timestamp no other test run is likely to index.
    fn unique_when() -> DateTime<Utc> {
        let offset = (Uuid::new_v4().as_u128() % 1_000_000_000_000) as i64;
        DateTime::from_timestamp_millis(1_000_000_000_000 + offset).unwrap()
    }

    async fn new_order(ids: &RedisIdGenerator, when: DateTime<Utc>, items: &[&str]) -> Order {
        let order_id = ids.next_id(ORDERS_KEYSPACE).await.unwrap();
        let mut line_items = Vec::new();
        for description in items {
            let item_id = ids.next_id(LINE_ITEMS_KEYSPACE).await.unwrap();
            line_items.push(LineItem::new(order_id, item_id, *description));
        }
        Order::new(order_id, when, line_items)
    }

    async fn cleanup(repo: &RedisRepository, order: &Order) {
        for item in &order.line_items {
            repo.delete_line_item(item.id).await.unwrap();
        }
        repo.delete_order(order.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_redis_save_and_find_by_when() {
        let Some(conn) = get_test_connection().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };
        let repo = RedisRepository::new(conn.clone());
        let ids = RedisIdGenerator::new(conn);

        let order = new_order(&ids, unique_when(), &["plunger", "soup", "coffee"]).await;
        for item in &order.line_items {
            repo.save_line_item(item).await.unwrap();
        }
        repo.save_order(&order).await.unwrap();

        let found = repo.find_orders_by_when(order.when).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0], order);
        assert_eq!(found[0].line_items.len(), 3);

        let items = repo.find_line_items_by_order_id(order.id).await.unwrap();
        assert_eq!(items.len(), 3);

        cleanup(&repo, &order).await;
        assert!(repo.get_order(order.id).await.unwrap().is_none());
        assert!(repo.find_orders_by_when(order.when).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_redis_upsert_moves_index() {
        let Some(conn) = get_test_connection().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };
        let repo = RedisRepository::new(conn.clone());
        let ids = RedisIdGenerator::new(conn.clone());

        let first_when = unique_when();
        let mut order = new_order(&ids, first_when, &[]).await;
        repo.save_order(&order).await.unwrap();

        order.when = unique_when();
        repo.save_order(&order).await.unwrap();

        assert!(repo.find_orders_by_when(first_when).await.unwrap().is_empty());
        assert_eq!(repo.find_orders_by_when(order.when).await.unwrap().len(), 1);

        let mut conn = conn;
        let tracked: Vec<String> = conn
            .smembers(index_tracking_key(ORDERS_KEYSPACE, order.id))
            .await
            .unwrap();
        assert_eq!(tracked, order_index_keys(&order));

        cleanup(&repo, &order).await;
    }

    #[tokio::test]
    async fn test_redis_hash_layout() {
        let Some(conn) = get_test_connection().await else {
            eprintln!("Skipping test: Redis not available");
            return;
        };
        let repo = RedisRepository::new(conn.clone());
        let ids = RedisIdGenerator::new(conn.clone());

        let order = new_order(&ids, unique_when(), &["soup"]).await;
        repo.save_line_item(&order.line_items[0]).await.unwrap();
        repo.save_order(&order).await.unwrap();

        let mut conn = conn;
        let hash: HashMap<String, String> =
            conn.hgetall(entity_key(ORDERS_KEYSPACE, order.id)).await.unwrap();
        assert_eq!(hash["id"], order.id.to_string());
        assert_eq!(hash["when"], order.when.timestamp_millis().to_string());
        assert_eq!(
            hash["lineItems.[0]"],
            format!("lineItems:{}", order.line_items[0].id)
        );

        cleanup(&repo, &order).await;
    }
}
