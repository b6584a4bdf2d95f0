use std::fs;
use std::path::PathBuf;

use srchannel::{SrChannelConfig, SrChannelProfileConfig, Timeframe, load_candles_csv};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    srchannel::init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "usage: cargo run -p replay --bin export_sr_channels -- <csv_path> <symbol> <timeframe:1m|5m|15m|1h|4h|1d> [output_json] [profile.yaml|json] [max_rows]"
        );
        std::process::exit(2);
    }

    let csv_path = PathBuf::from(&args[1]);
    let symbol = args[2].clone();
    let timeframe = Timeframe::parse(&args[3])?;
    let output = match args.get(4) {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(format!(
            "replay/out/sr-channels-{}-{}.json",
            symbol.to_ascii_lowercase(),
            timeframe.as_str()
        )),
    };
    let config = match args.get(5) {
        Some(path) => SrChannelProfileConfig::load(path)?.resolve_for(&symbol, timeframe),
        None => SrChannelConfig::default(),
    };
    let max_rows = args.get(6).map(|x| x.parse::<usize>()).transpose()?;

    let mut candles = load_candles_csv(&csv_path)?;
    if let Some(max_rows) = max_rows {
        candles.truncate(max_rows);
    }
    info!(
        path = %csv_path.display(),
        candles = candles.len(),
        ?config,
        "candles loaded"
    );

    let payload = replay::build_export(&symbol, timeframe, &candles, &config);

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output, serde_json::to_vec_pretty(&payload)?)?;

    info!(
        output = %output.display(),
        candles = payload.candles.len(),
        channels = payload.channels.len(),
        "sr channels exported"
    );

    Ok(())
}
