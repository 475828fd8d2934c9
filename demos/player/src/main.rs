// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Demo: player stats kept in shroud containers
//
// Runs a bounded update loop, rekeys every few ticks and prints the real
// (backing) and decoy address of each counter so a memory scanner can be
// pointed at them.

mod stats;

use std::thread;
use std::time::Duration;

use clap::Parser;
use shroud::Runtime;
use shroud_cipher::{KEY_SIZE, NONCE_SIZE, transform};

use stats::PlayerStats;

#[derive(Parser)]
#[command(name = "player-demo")]
#[command(about = "Exercise shroud containers in a game-style update loop")]
struct Cli {
    /// Number of updates to run
    #[arg(long, default_value_t = 30)]
    ticks: u32,

    /// Delay between updates in milliseconds
    #[arg(long, default_value_t = 500)]
    interval_ms: u64,

    /// Rekey every N updates (0 disables rekeying)
    #[arg(long, default_value_t = 15)]
    rekey_every: u32,
}

fn symmetry_check() -> bool {
    let mut key = [0u8; KEY_SIZE];
    key[..4].copy_from_slice(&[0x9f, 0x5d, 0x21, 0x6c]);
    let nonce: [u8; NONCE_SIZE] = [
        0xcc, 0xbc, 0x54, 0xf1, 0x01, 0xf9, 0xf5, 0x7c, 0x78, 0x58, 0x6b, 0xeb,
    ];
    let input = [0u8; 64];

    let encrypted = transform(&input, &key, &nonce, 0);
    let decrypted = transform(&encrypted, &key, &nonce, 0);

    encrypted != input && decrypted == input
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    if symmetry_check() {
        println!("Symmetry check passed");
    } else {
        return Err("cipher symmetry check failed".into());
    }

    let mut player = PlayerStats::new(100, 0, 10.0, 20.0, 30.0)?;

    println!("Initial state:\n{}\n", player);
    player.print_layout();

    for tick in 0..cli.ticks {
        player.tick(tick)?;

        println!("\nUpdate #{}\n{}", tick, player);
        player.print_layout();

        if cli.rekey_every != 0 && (tick + 1) % cli.rekey_every == 0 {
            log::info!("rekeying player stats after tick {}", tick);
            player.rekey()?;
            println!("Rekeyed");
        }

        if cli.interval_ms != 0 {
            thread::sleep(Duration::from_millis(cli.interval_ms));
        }
    }

    let stats = Runtime::global().pool_stats();
    println!(
        "\nPool: {} reservations, {} reuse hits, {} pooled, high water {}",
        stats.host_reservations, stats.reuse_hits, stats.pooled, stats.high_water
    );

    Ok(())
}
