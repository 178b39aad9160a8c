//! Feed simulator
//!
//! Appends a paired OPEN then CLOSE event for one generated trade id to
//! the feed file, for exercising the pipeline end to end:
//!
//! ```bash
//! cargo run --bin simulate -- data/events.jsonl
//! ```

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use trade_bridge::core::TradeEvent;

fn emit(path: &Path, event: &TradeEvent) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", serde_json::to_string(event)?)?;
    Ok(())
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/events.jsonl".to_string());
    let path = Path::new(&path);

    let source_trade_id = Uuid::new_v4().to_string();

    let open_event = TradeEvent {
        event: "OPEN".to_string(),
        source: "vantage".to_string(),
        source_trade_id: source_trade_id.clone(),
        symbol: Some("XAUUSD".to_string()),
        side: "BUY".to_string(),
        lots: Decimal::new(10, 2),
        sl: None,
        tp: None,
        timestamp: now_iso(),
    };
    emit(path, &open_event)?;
    println!("emitted OPEN for {}", source_trade_id);

    sleep(Duration::from_secs(2));

    let close_event = TradeEvent {
        event: "CLOSE".to_string(),
        timestamp: now_iso(),
        ..open_event
    };
    emit(path, &close_event)?;
    println!("emitted CLOSE for {}", source_trade_id);

    Ok(())
}
