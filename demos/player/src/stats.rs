// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use shroud::{ContainerError, GuardedContainer};

pub struct PlayerPosition {
    pub x: GuardedContainer<f32>,
    pub y: GuardedContainer<f32>,
    pub z: GuardedContainer<f32>,
}

impl PlayerPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Result<Self, ContainerError> {
        Ok(Self {
            x: GuardedContainer::new(x)?,
            y: GuardedContainer::new(y)?,
            z: GuardedContainer::new(z)?,
        })
    }

    pub fn rekey(&mut self) -> Result<(), ContainerError> {
        self.x.rekey()?;
        self.y.rekey()?;
        self.z.rekey()
    }
}

impl fmt::Display for PlayerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

pub struct PlayerStats {
    pub health: GuardedContainer<u32>,
    pub score: GuardedContainer<u32>,
    pub position: PlayerPosition,
}

impl PlayerStats {
    pub fn new(health: u32, score: u32, x: f32, y: f32, z: f32) -> Result<Self, ContainerError> {
        Ok(Self {
            health: GuardedContainer::new(health)?,
            score: GuardedContainer::new(score)?,
            position: PlayerPosition::new(x, y, z)?,
        })
    }

    /// One simulation step: health oscillates, score climbs, position orbits.
    pub fn tick(&mut self, tick: u32) -> Result<(), ContainerError> {
        self.health.set(100 + tick % 50)?;
        self.score.add(10)?;

        let phase = tick as f32 * 0.1;
        self.position.x.set(10.0 + phase.sin() * 5.0)?;
        self.position.y.set(20.0 + phase.cos() * 5.0)?;

        Ok(())
    }

    pub fn rekey(&mut self) -> Result<(), ContainerError> {
        self.health.rekey()?;
        self.score.rekey()?;
        self.position.rekey()
    }

    pub fn print_layout(&self) {
        print_addresses("Health", &self.health);
        print_addresses("Score", &self.score);
    }
}

impl fmt::Display for PlayerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Health: {}", self.health)?;
        writeln!(f, "Score: {}", self.score)?;
        write!(f, "Position: {}", self.position)
    }
}

fn print_addresses(label: &str, container: &GuardedContainer<u32>) {
    let real = container
        .real_address()
        .map_or_else(|| "-".to_string(), |addr| format!("{:#x}", addr));

    println!(
        "{} - Real: {} Decoy: {:#x} Value: {}",
        label,
        real,
        container.decoy_address(),
        container
    );
}
