//! Cache Facade
//!
//! Typed string/hash/list/set/sorted-set operations, each a thin
//! pass-through to the external store. No retry, pooling or consistency
//! logic lives here; a connectivity failure propagates unmodified to the
//! error mapper.

use std::collections::HashMap;

use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use crate::error::Result;

/// Typed wrapper over the shared Redis connection.
///
/// Cloning is cheap; all clones multiplex over the same connection.
#[derive(Clone)]
pub struct CacheService {
    conn: ConnectionManager,
}

impl CacheService {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    // == String Operations ==

    /// Returns the value for `key`, or `None` when absent or expired.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        Ok(conn.get(key).await?)
    }

    /// Stores `value` under `key`. A TTL greater than zero applies the
    /// expiry atomically with the write (SETEX); absent or zero means no
    /// expiry.
    pub async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> Result<()> {
        let mut conn = self.conn.clone();
        match ttl {
            Some(seconds) if seconds > 0 => {
                let _: () = conn.set_ex(key, value, seconds).await?;
            }
            _ => {
                let _: () = conn.set(key, value).await?;
            }
        }
        Ok(())
    }

    /// Removes `key`; returns the number of keys removed (0 or 1).
    pub async fn del(&self, key: &str) -> Result<u64> {
        let mut conn = self.conn.clone();
        Ok(conn.del(key).await?)
    }

    /// Returns 1 when `key` exists, else 0.
    pub async fn exists(&self, key: &str) -> Result<u64> {
        let mut conn = self.conn.clone();
        Ok(conn.exists(key).await?)
    }

    /// Sets a TTL on an existing key; returns 1 when the key existed and
    /// the TTL was set, else 0.
    pub async fn expire(&self, key: &str, seconds: i64) -> Result<u64> {
        let mut conn = self.conn.clone();
        Ok(conn.expire(key, seconds).await?)
    }

    // == Hash Operations ==

    pub async fn hget(&self, key: &str, field: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        Ok(conn.hget(key, field).await?)
    }

    /// Sets a hash field; returns the number of fields newly created.
    pub async fn hset(&self, key: &str, field: &str, value: &str) -> Result<u64> {
        let mut conn = self.conn.clone();
        Ok(conn.hset(key, field, value).await?)
    }

    pub async fn hdel(&self, key: &str, field: &str) -> Result<u64> {
        let mut conn = self.conn.clone();
        Ok(conn.hdel(key, field).await?)
    }

    pub async fn hgetall(&self, key: &str) -> Result<HashMap<String, String>> {
        let mut conn = self.conn.clone();
        Ok(conn.hgetall(key).await?)
    }

    // == List Operations ==

    /// Pushes values onto the head of the list; returns the new length.
    pub async fn lpush(&self, key: &str, values: &[String]) -> Result<u64> {
        let mut conn = self.conn.clone();
        Ok(conn.lpush(key, values).await?)
    }

    /// Pushes values onto the tail of the list; returns the new length.
    pub async fn rpush(&self, key: &str, values: &[String]) -> Result<u64> {
        let mut conn = self.conn.clone();
        Ok(conn.rpush(key, values).await?)
    }

    pub async fn lpop(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        Ok(conn.lpop(key, None).await?)
    }

    pub async fn rpop(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        Ok(conn.rpop(key, None).await?)
    }

    /// Returns the slice of the list between `start` and `stop`, inclusive;
    /// negative indices count from the tail.
    pub async fn lrange(&self, key: &str, start: isize, stop: isize) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        Ok(conn.lrange(key, start, stop).await?)
    }

    // == Set Operations ==

    /// Adds members to the set; returns the number actually added.
    pub async fn sadd(&self, key: &str, members: &[String]) -> Result<u64> {
        let mut conn = self.conn.clone();
        Ok(conn.sadd(key, members).await?)
    }

    pub async fn srem(&self, key: &str, members: &[String]) -> Result<u64> {
        let mut conn = self.conn.clone();
        Ok(conn.srem(key, members).await?)
    }

    pub async fn smembers(&self, key: &str) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        Ok(conn.smembers(key).await?)
    }

    /// Returns 1 when `member` is in the set, else 0.
    pub async fn sismember(&self, key: &str, member: &str) -> Result<u64> {
        let mut conn = self.conn.clone();
        Ok(conn.sismember(key, member).await?)
    }

    // == Sorted-Set Operations ==

    /// Adds a member with a score; returns the number of members added.
    pub async fn zadd(&self, key: &str, score: f64, member: &str) -> Result<u64> {
        let mut conn = self.conn.clone();
        Ok(conn.zadd(key, member, score).await?)
    }

    pub async fn zrem(&self, key: &str, members: &[String]) -> Result<u64> {
        let mut conn = self.conn.clone();
        Ok(conn.zrem(key, members).await?)
    }

    /// Returns members between `start` and `stop` ordered by ascending
    /// score.
    pub async fn zrange(&self, key: &str, start: isize, stop: isize) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        Ok(conn.zrange(key, start, stop).await?)
    }

    pub async fn zscore(&self, key: &str, member: &str) -> Result<Option<f64>> {
        let mut conn = self.conn.clone();
        Ok(conn.zscore(key, member).await?)
    }
}
