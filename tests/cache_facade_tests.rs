//! Cache Facade Tests
//!
//! Exercise the typed facade against a live Redis; `#[ignore]`d by default:
//!   `cargo test -- --ignored`
//! expects Redis on `REDIS_HOST`/`REDIS_PORT` (default 127.0.0.1:6379).
//! Keys are prefixed per test and deleted up front so reruns are stable.

use std::time::Duration;

use userhub::cache::{connect, CacheService};
use userhub::config::RedisConfig;

fn test_redis_config() -> RedisConfig {
    RedisConfig {
        host: std::env::var("REDIS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
        port: std::env::var("REDIS_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(6379),
        password: std::env::var("REDIS_PASSWORD").ok().filter(|v| !v.is_empty()),
        db: 0,
    }
}

async fn test_cache() -> CacheService {
    let conn = connect(&test_redis_config())
        .await
        .expect("Redis must be running for ignored facade tests");
    CacheService::new(conn)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
#[ignore = "requires running Redis"]
async fn test_set_get_roundtrip_and_overwrite() {
    let cache = test_cache().await;
    cache.del("facade:str").await.unwrap();

    cache.set("facade:str", "v", None).await.unwrap();
    assert_eq!(cache.get("facade:str").await.unwrap().as_deref(), Some("v"));

    // Repeated set overwrites.
    cache.set("facade:str", "v2", Some(60)).await.unwrap();
    assert_eq!(cache.get("facade:str").await.unwrap().as_deref(), Some("v2"));
}

#[tokio::test]
#[ignore = "requires running Redis"]
async fn test_get_missing_is_none_not_error() {
    let cache = test_cache().await;
    cache.del("facade:missing").await.unwrap();

    assert_eq!(cache.get("facade:missing").await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires running Redis"]
async fn test_ttl_expires_key() {
    let cache = test_cache().await;

    cache.set("facade:ttl", "v", Some(1)).await.unwrap();
    assert!(cache.get("facade:ttl").await.unwrap().is_some());

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(cache.get("facade:ttl").await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires running Redis"]
async fn test_del_returns_removed_count() {
    let cache = test_cache().await;
    cache.del("facade:del").await.unwrap();

    assert_eq!(cache.del("facade:del").await.unwrap(), 0);

    cache.set("facade:del", "v", None).await.unwrap();
    assert_eq!(cache.del("facade:del").await.unwrap(), 1);
    assert_eq!(cache.get("facade:del").await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires running Redis"]
async fn test_exists_and_expire() {
    let cache = test_cache().await;
    cache.del("facade:exp").await.unwrap();

    assert_eq!(cache.exists("facade:exp").await.unwrap(), 0);
    assert_eq!(cache.expire("facade:exp", 60).await.unwrap(), 0);

    cache.set("facade:exp", "v", None).await.unwrap();
    assert_eq!(cache.exists("facade:exp").await.unwrap(), 1);
    assert_eq!(cache.expire("facade:exp", 60).await.unwrap(), 1);
}

#[tokio::test]
#[ignore = "requires running Redis"]
async fn test_hash_operations() {
    let cache = test_cache().await;
    cache.del("facade:hash").await.unwrap();

    assert_eq!(cache.hset("facade:hash", "f", "1").await.unwrap(), 1);
    assert_eq!(
        cache.hget("facade:hash", "f").await.unwrap().as_deref(),
        Some("1")
    );

    let all = cache.hgetall("facade:hash").await.unwrap();
    assert_eq!(all.get("f").map(String::as_str), Some("1"));

    assert_eq!(cache.hdel("facade:hash", "f").await.unwrap(), 1);
    assert_eq!(cache.hget("facade:hash", "f").await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires running Redis"]
async fn test_list_operations() {
    let cache = test_cache().await;
    cache.del("facade:list").await.unwrap();

    assert_eq!(
        cache.rpush("facade:list", &strings(&["a", "b"])).await.unwrap(),
        2
    );
    assert_eq!(
        cache.lpush("facade:list", &strings(&["z"])).await.unwrap(),
        3
    );

    assert_eq!(
        cache.lrange("facade:list", 0, -1).await.unwrap(),
        strings(&["z", "a", "b"])
    );

    assert_eq!(cache.lpop("facade:list").await.unwrap().as_deref(), Some("z"));
    assert_eq!(cache.rpop("facade:list").await.unwrap().as_deref(), Some("b"));
}

#[tokio::test]
#[ignore = "requires running Redis"]
async fn test_set_operations() {
    let cache = test_cache().await;
    cache.del("facade:set").await.unwrap();

    assert_eq!(
        cache
            .sadd("facade:set", &strings(&["a", "b", "a"]))
            .await
            .unwrap(),
        2
    );
    assert_eq!(cache.sismember("facade:set", "a").await.unwrap(), 1);
    assert_eq!(cache.sismember("facade:set", "c").await.unwrap(), 0);

    let mut members = cache.smembers("facade:set").await.unwrap();
    members.sort();
    assert_eq!(members, strings(&["a", "b"]));

    assert_eq!(cache.srem("facade:set", &strings(&["a"])).await.unwrap(), 1);
}

#[tokio::test]
#[ignore = "requires running Redis"]
async fn test_sorted_set_operations() {
    let cache = test_cache().await;
    cache.del("facade:zset").await.unwrap();

    assert_eq!(cache.zadd("facade:zset", 2.0, "b").await.unwrap(), 1);
    assert_eq!(cache.zadd("facade:zset", 1.0, "a").await.unwrap(), 1);
    assert_eq!(cache.zadd("facade:zset", 3.0, "c").await.unwrap(), 1);

    // Ascending score order.
    assert_eq!(
        cache.zrange("facade:zset", 0, -1).await.unwrap(),
        strings(&["a", "b", "c"])
    );
    assert_eq!(cache.zscore("facade:zset", "b").await.unwrap(), Some(2.0));
    assert_eq!(cache.zscore("facade:zset", "missing").await.unwrap(), None);

    assert_eq!(
        cache.zrem("facade:zset", &strings(&["a"])).await.unwrap(),
        1
    );
}
