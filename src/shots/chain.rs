use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::model::{Game, HOLES_PER_ROUND, PlayerId, Shot, ShotEdit, ShotKey};

/// Keys of the shots whose stored record changed in one operation. A caller
/// persisting the chain must write all of them together.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainUpdate {
    pub touched: Vec<ShotKey>,
}

impl ChainUpdate {
    fn touch(&mut self, key: ShotKey) {
        if !self.touched.contains(&key) {
            self.touched.push(key);
        }
    }
}

/// Carry of `earlier`: its remaining distance less what `later` left.
#[must_use]
pub fn carry_between(earlier: &Shot, later: &Shot) -> Option<i32> {
    Some(earlier.remaining_yards? - later.effective_remaining()?)
}

type Sequence = BTreeMap<u8, Shot>;

/// Shots of one game, one ordered sequence per (player, hole). Persist it
/// through `shots()`; reload with `from_shots`.
#[derive(Clone, Debug, Default)]
pub struct ShotChain {
    game_id: i64,
    sequences: BTreeMap<(PlayerId, u8), Sequence>,
}

impl ShotChain {
    #[must_use]
    pub fn new(game_id: i64) -> Self {
        Self {
            game_id,
            sequences: BTreeMap::new(),
        }
    }

    /// Loads stored shots and recomputes every carry.
    ///
    /// # Errors
    ///
    /// Will return `Err` if a shot is invalid or the same shot appears twice.
    pub fn from_shots(game_id: i64, shots: Vec<Shot>) -> Result<Self, CoreError> {
        let mut chain = Self::new(game_id);
        for mut shot in shots {
            validate(&shot)?;
            shot.sync_putt_distance();
            let key = shot.key;
            let seq = chain.sequences.entry((key.player, key.hole)).or_default();
            if seq.insert(key.shot, shot).is_some() {
                return Err(CoreError::DuplicateShot {
                    player: key.player,
                    hole: key.hole,
                    shot: key.shot,
                });
            }
        }
        chain.recompute_all();
        Ok(chain)
    }

    #[must_use]
    pub fn game_id(&self) -> i64 {
        self.game_id
    }

    #[must_use]
    pub fn get(&self, key: ShotKey) -> Option<&Shot> {
        self.sequences
            .get(&(key.player, key.hole))
            .and_then(|seq| seq.get(&key.shot))
    }

    #[must_use]
    pub fn carry(&self, key: ShotKey) -> Option<i32> {
        self.get(key).and_then(|s| s.carry)
    }

    /// Shots for a player's hole in shot order.
    pub fn hole_shots(&self, player: PlayerId, hole: u8) -> impl Iterator<Item = &Shot> {
        self.sequences
            .get(&(player, hole))
            .into_iter()
            .flat_map(BTreeMap::values)
    }

    pub fn shots(&self) -> impl Iterator<Item = &Shot> {
        self.sequences.values().flat_map(BTreeMap::values)
    }

    #[must_use]
    pub fn putts(&self, player: PlayerId, hole: u8) -> usize {
        self.hole_shots(player, hole).filter(|s| s.putt).count()
    }

    /// Strokes implied by the tracked shots, `None` if none were tracked.
    #[must_use]
    pub fn strokes(&self, player: PlayerId, hole: u8) -> Option<i32> {
        let count = self.hole_shots(player, hole).count();
        (count > 0).then_some(count as i32)
    }

    /// Adds a new shot and recomputes its own carry and its predecessor's.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the shot is invalid, belongs to another game, or is
    /// already recorded.
    pub fn record(&mut self, mut shot: Shot) -> Result<ChainUpdate, CoreError> {
        validate(&shot)?;
        if shot.game_id != self.game_id {
            return Err(CoreError::InvalidShot(format!(
                "shot belongs to game {}, not {}",
                shot.game_id, self.game_id
            )));
        }
        let key = shot.key;
        let seq = self.sequences.entry((key.player, key.hole)).or_default();
        if seq.contains_key(&key.shot) {
            return Err(CoreError::DuplicateShot {
                player: key.player,
                hole: key.hole,
                shot: key.shot,
            });
        }
        shot.sync_putt_distance();
        shot.carry = None;
        seq.insert(key.shot, shot);

        let mut update = ChainUpdate::default();
        update.touch(key);
        relink(seq, key, &mut update);
        Ok(update)
    }

    /// Records a shot only for players whose shots the game tracks.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the player is not tracked in `game`, or as `record`.
    pub fn record_tracked(&mut self, game: &Game, shot: Shot) -> Result<ChainUpdate, CoreError> {
        if !game.is_tracked(shot.key.player) {
            return Err(CoreError::UnknownPlayer(shot.key.player));
        }
        self.record(shot)
    }

    /// # Errors
    ///
    /// Will return `Err` if the shot does not exist or the edit makes it invalid.
    pub fn edit(&mut self, key: ShotKey, edit: &ShotEdit) -> Result<ChainUpdate, CoreError> {
        let seq = self
            .sequences
            .get_mut(&(key.player, key.hole))
            .ok_or(CoreError::ShotNotFound {
                player: key.player,
                hole: key.hole,
                shot: key.shot,
            })?;
        let shot = seq.get_mut(&key.shot).ok_or(CoreError::ShotNotFound {
            player: key.player,
            hole: key.hole,
            shot: key.shot,
        })?;

        let mut edited = shot.clone();
        edit.apply(&mut edited);
        validate(&edited)?;
        *shot = edited;

        let mut update = ChainUpdate::default();
        update.touch(key);
        relink(seq, key, &mut update);
        Ok(update)
    }

    /// Deletes a shot. The previous shot is relinked to whatever now follows it.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the shot does not exist.
    pub fn remove(&mut self, key: ShotKey) -> Result<(Shot, ChainUpdate), CoreError> {
        let not_found = CoreError::ShotNotFound {
            player: key.player,
            hole: key.hole,
            shot: key.shot,
        };
        let seq = self
            .sequences
            .get_mut(&(key.player, key.hole))
            .ok_or_else(|| not_found.clone())?;
        let removed = seq.remove(&key.shot).ok_or(not_found)?;

        let mut update = ChainUpdate::default();
        if let Some(prev) = seq.range(..key.shot).next_back().map(|(n, _)| *n) {
            let prev_key = ShotKey::new(key.player, key.hole, prev);
            relink(seq, prev_key, &mut update);
        }
        if seq.is_empty() {
            self.sequences.remove(&(key.player, key.hole));
        }
        Ok((removed, update))
    }

    /// Recomputes every carry on a player's hole from scratch.
    pub fn recompute_hole(&mut self, player: PlayerId, hole: u8) -> ChainUpdate {
        let mut update = ChainUpdate::default();
        if let Some(seq) = self.sequences.get_mut(&(player, hole)) {
            recompute_sequence(seq, &mut update);
        }
        update
    }

    pub fn recompute_all(&mut self) -> ChainUpdate {
        let mut update = ChainUpdate::default();
        for seq in self.sequences.values_mut() {
            recompute_sequence(seq, &mut update);
        }
        update
    }
}

fn validate(shot: &Shot) -> Result<(), CoreError> {
    let key = shot.key;
    if key.shot == 0 {
        return Err(CoreError::InvalidShot("shot numbers start at 1".to_string()));
    }
    if !(1..=HOLES_PER_ROUND).contains(&key.hole) {
        return Err(CoreError::InvalidShot(format!("no hole {}", key.hole)));
    }
    if shot.putt_feet.is_some_and(|f| f < 0) {
        return Err(CoreError::InvalidShot(format!(
            "negative putt length on hole {}",
            key.hole
        )));
    }
    Ok(())
}

fn set_carry(seq: &mut Sequence, number: u8, carry: Option<i32>, update: &mut ChainUpdate) {
    if let Some(shot) = seq.get_mut(&number) {
        if shot.carry != carry {
            shot.carry = carry;
            update.touch(shot.key);
        }
    }
}

/// Recomputes the carry of the shot at `key` and of the shot just before it.
fn relink(seq: &mut Sequence, key: ShotKey, update: &mut ChainUpdate) {
    let Some(this) = seq.get(&key.shot) else {
        return;
    };
    let prev = seq.range(..key.shot).next_back();
    let next = seq.range(key.shot.saturating_add(1)..).next();

    let prev_carry = prev.map(|(n, p)| (*n, carry_between(p, this)));
    let own_carry = next.and_then(|(_, n)| carry_between(this, n));

    if let Some((number, carry)) = prev_carry {
        log::debug!(
            "player {} hole {} shot {number} carry -> {carry:?}",
            key.player,
            key.hole
        );
        set_carry(seq, number, carry, update);
    }
    set_carry(seq, key.shot, own_carry, update);
}

fn recompute_sequence(seq: &mut Sequence, update: &mut ChainUpdate) {
    let numbers: Vec<u8> = seq.keys().copied().collect();
    let carries: Vec<Option<i32>> = numbers
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let next = numbers.get(i + 1)?;
            carry_between(seq.get(n)?, seq.get(next)?)
        })
        .collect();
    for (number, carry) in numbers.into_iter().zip(carries) {
        set_carry(seq, number, carry, update);
    }
}
