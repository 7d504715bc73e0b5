extern crate alloc;

use alloc::vec::Vec;

use crate::error::ActionError;

use super::action::Action;
use super::board::{Coord, Reach};
use super::cards::TreasureCard;
use super::events::GameEvent;
use super::state::Outcome;
use super::IslandGame;

/// Matching cards traded in for a treasure.
pub(super) const TREASURE_SET: usize = 4;

impl IslandGame {
    /// Applies an action chosen from [`IslandGame::legal_actions`].
    ///
    /// Moves, shores, card passes and treasure collection spend one of the
    /// turn's actions. Sandbags, Helicopter Lifts and discards are free. Once
    /// the turn is used up the end-of-turn draw and flood run before this
    /// returns, unless a hand must first be discarded down.
    ///
    /// Returns what happened, in order.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::GameOver`] once the game has ended and
    /// [`ActionError::NotLegal`] for an action not currently offered.
    pub fn apply(&mut self, action: Action) -> Result<Vec<GameEvent>, ActionError> {
        if self.is_game_over() {
            return Err(ActionError::GameOver);
        }
        if !self.legal_actions(self.turn).contains(&action) {
            return Err(ActionError::NotLegal);
        }

        let mut events = Vec::new();
        let costs_action = action.costs_action();

        match action {
            Action::EndTurn { .. } => self.passing = true,
            Action::Move {
                player,
                adventurer,
                to,
            } => self.move_adventurer(player, adventurer, to, &mut events),
            Action::Shore {
                tile, second, ..
            } => {
                self.shore(tile, &mut events);
                if let Some(second) = second {
                    self.shore(second, &mut events);
                }
            }
            Action::PassCard {
                from,
                card_index,
                to,
            } => {
                let card = self.hands[from].remove_at(card_index)?;
                self.hands[to].push(card);
                events.push(GameEvent::CardPassed { from, to, card });
            }
            Action::CollectTreasure { player, .. } => self.collect_treasure(player, &mut events),
            Action::PlaySandbags {
                owner,
                card_index,
                tile,
                ..
            } => {
                self.shore(tile, &mut events);
                self.discard(owner, card_index, &mut events)?;
            }
            Action::PlayHeliLift {
                owner,
                card_index,
                adventurers,
                from,
                to,
                ..
            } => {
                for adventurer in adventurers {
                    self.positions[adventurer] = to;
                    events.push(GameEvent::Moved {
                        adventurer,
                        from,
                        to,
                    });
                }
                self.discard(owner, card_index, &mut events)?;
            }
            Action::LiftOff {
                owner, card_index, ..
            } => {
                self.discard(owner, card_index, &mut events)?;
                self.ended = Some(Outcome::Won);
            }
            Action::Discard { player, card_index } => {
                self.discard(player, card_index, &mut events)?;
            }
        }

        if costs_action {
            self.actions_taken += 1;
        }
        if !self.is_game_over() && self.turn_ending() {
            self.advance_turn(&mut events);
        }
        if self.is_game_over() {
            events.push(GameEvent::GameEnded {
                outcome: self.outcome(),
            });
        }

        Ok(events)
    }

    fn move_adventurer(
        &mut self,
        player: usize,
        adventurer: usize,
        to: Coord,
        events: &mut Vec<GameEvent>,
    ) {
        let from = self.positions[adventurer];
        let flies = self.roles[player].capabilities().flies;
        if adventurer == player && flies && !Reach::Adjacent.contains(from, to) {
            self.flights_taken += 1;
            events.push(GameEvent::Flew { player });
        }
        self.positions[adventurer] = to;
        events.push(GameEvent::Moved {
            adventurer,
            from,
            to,
        });
    }

    fn shore(&mut self, coord: Coord, events: &mut Vec<GameEvent>) {
        if let Some(tile) = self.board.tile_at_mut(coord) {
            if tile.is_flooded() {
                tile.shore();
                events.push(GameEvent::Shored { tile: coord });
            }
        }
    }

    /// Trades four matching cards for the treasure under `player`. Does
    /// nothing unless the tile holds an unclaimed treasure and the hand has
    /// the set.
    fn collect_treasure(&mut self, player: usize, events: &mut Vec<GameEvent>) {
        let Some(treasure) = self.tile_of(player).and_then(|t| t.treasure) else {
            return;
        };
        let card = TreasureCard::Treasure(treasure);
        if self.collected.contains(&treasure) || self.hands[player].count(&card) < TREASURE_SET {
            return;
        }

        for _ in 0..TREASURE_SET {
            if let Ok(spent) = self.hands[player].remove(&card) {
                self.treasure_discard.push(spent);
            }
        }
        self.collected.push(treasure);
        events.push(GameEvent::TreasureCollected { player, treasure });
    }

    fn discard(
        &mut self,
        player: usize,
        card_index: usize,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), ActionError> {
        let card = self.hands[player].remove_at(card_index)?;
        self.treasure_discard.push(card);
        events.push(GameEvent::Discarded { player, card });
        Ok(())
    }
}
