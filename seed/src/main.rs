use chrono::{DateTime, Duration, Utc};
use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;

struct DemoReply {
    minutes_later: i64,
    name: &'static str,
    content: &'static str,
}

struct DemoThread {
    days_ago: i64,
    name: &'static str,
    content: &'static str,
    replies: &'static [DemoReply],
}

const DEMO_PAGES: &[(&str, &[DemoThread])] = &[
    (
        "kind-of-blue",
        &[
            DemoThread {
                days_ago: 5,
                name: "ジャズ好き",
                content: "何度聴いても新しい発見がある名盤です。So Whatのイントロは永遠。",
                replies: &[
                    DemoReply {
                        minutes_later: 42,
                        name: "匿名",
                        content: "わかります。夜に聴くのが最高ですね。",
                    },
                    DemoReply {
                        minutes_later: 90,
                        name: "トランペット吹き",
                        content: "マイルスのミュートの音色は唯一無二だと思います。",
                    },
                ],
            },
            DemoThread {
                days_ago: 2,
                name: "初心者",
                content: "ジャズ入門におすすめと聞いて来ました。最初に聴くべき曲はどれですか？",
                replies: &[DemoReply {
                    minutes_later: 15,
                    name: "ジャズ好き",
                    content: "1曲目から順番に通して聴くのがおすすめです。",
                }],
            },
        ],
    ),
    (
        "abbey-road",
        &[DemoThread {
            days_ago: 3,
            name: "匿名",
            content: "B面のメドレーは音楽史に残る傑作。",
            replies: &[],
        }],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let database_url = std::env::var("DATABASE_URL").map_err(|e| {
        eprintln!("Error: DATABASE_URL environment variable not set or accessible.");
        e
    })?;

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await?;

    let now = Utc::now();

    for &(page, threads) in DEMO_PAGES {
        for thread in threads {
            let posted_at = now - Duration::days(thread.days_ago);
            let root_id =
                insert_comment(&pool, thread.content, thread.name, page, None, posted_at).await?;

            for reply in thread.replies {
                let reply_at = posted_at + Duration::minutes(reply.minutes_later);
                insert_comment(&pool, reply.content, reply.name, page, Some(root_id), reply_at)
                    .await?;
            }
        }
        info!("seeded comments for page {page}");
    }

    Ok(())
}

async fn insert_comment(
    pool: &PgPool,
    content: &str,
    name: &str,
    page: &str,
    parent_id: Option<Uuid>,
    created_at: DateTime<Utc>,
) -> Result<Uuid, sqlx::Error> {
    let row = sqlx::query(
        "INSERT INTO Comments(content, name, page, parent_id, created_at)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(content)
    .bind(name)
    .bind(page)
    .bind(parent_id)
    .bind(created_at)
    .fetch_one(pool)
    .await?;

    row.try_get("id")
}
