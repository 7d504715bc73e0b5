extern crate alloc;

use alloc::vec::Vec;

use super::board::Coord;
use super::cards::TreasureCard;
use super::events::{DeckKind, GameEvent};
use super::state::{LossReason, Outcome};
use super::IslandGame;

impl IslandGame {
    /// Runs the end of the turn: treasure draw, flood draw, counter reset and
    /// seat rotation.
    ///
    /// Stops early while the active hand is over the limit; the next discard
    /// that brings it back under resumes from where it stopped. Also stops as
    /// soon as the game is lost.
    pub(super) fn advance_turn(&mut self, events: &mut Vec<GameEvent>) {
        let player = self.turn;
        if self.over_limit(player) {
            return;
        }

        if !self.treasure_drawn {
            self.treasure_drawn = true;
            self.draw_treasure_cards(player, events);
            if self.is_game_over() || self.over_limit(player) {
                return;
            }
        }

        self.draw_flood_cards(events);
        if self.is_game_over() {
            return;
        }

        self.actions_taken = 0;
        self.flights_taken = 0;
        self.passing = false;
        self.treasure_drawn = false;
        self.turn = (self.turn + 1) % self.player_count();
        events.push(GameEvent::TurnPassed { next: self.turn });
    }

    fn draw_treasure_cards(&mut self, player: usize, events: &mut Vec<GameEvent>) {
        for _ in 0..self.options.treasure_draws {
            if self.treasure_deck.is_empty() && !self.treasure_discard.is_empty() {
                self.treasure_deck.append(&mut self.treasure_discard);
                self.treasure_deck.shuffle(&mut self.rng);
                events.push(GameEvent::Reshuffled {
                    deck: DeckKind::Treasure,
                });
            }
            let Some(card) = self.treasure_deck.pop() else {
                return;
            };

            if card == TreasureCard::WatersRise {
                self.treasure_discard.push(card);
                self.waters_rise(events);
                if self.water.is_death_level() {
                    return;
                }
            } else {
                self.hands[player].push(card);
                events.push(GameEvent::CardDrawn { player, card });
            }
        }
    }

    /// Raises the meter and puts the flooded tiles' cards back on top of the
    /// flood deck.
    fn waters_rise(&mut self, events: &mut Vec<GameEvent>) {
        if self.water.is_death_level() {
            return;
        }
        self.water.waters_rise();
        events.push(GameEvent::WatersRose {
            level: self.water.index(),
        });

        self.flood_discard.shuffle(&mut self.rng);
        self.flood_deck.append(&mut self.flood_discard);
    }

    fn draw_flood_cards(&mut self, events: &mut Vec<GameEvent>) {
        for _ in 0..self.water.draw_count() {
            if self.flood_deck.is_empty() && !self.flood_discard.is_empty() {
                self.flood_deck.append(&mut self.flood_discard);
                self.flood_deck.shuffle(&mut self.rng);
                events.push(GameEvent::Reshuffled {
                    deck: DeckKind::Flood,
                });
            }
            let Some(card) = self.flood_deck.pop() else {
                return;
            };
            let Some(coord) = self.board.coord_of(card.tile) else {
                continue;
            };
            let Some(tile) = self.board.tile_at_mut(coord) else {
                continue;
            };

            tile.sink();
            if tile.is_sunken() {
                // The card leaves the game with its tile.
                events.push(GameEvent::TileSunk { tile: coord });
                self.evacuate(coord, events);
            } else {
                events.push(GameEvent::TileFlooded { tile: coord });
                self.flood_discard.push(card);
            }

            if self.is_game_over() {
                return;
            }
        }
    }

    /// Swims every adventurer off a tile that just sank, to the first tile
    /// their own movement allows.
    fn evacuate(&mut self, sunk: Coord, events: &mut Vec<GameEvent>) {
        for adventurer in self.adventurers_at(sunk) {
            // Swimming never uses the Pilot's flight for the turn.
            let saved_flights = self.flights_taken;
            self.flights_taken = 0;
            let escape = self.own_destinations(adventurer).first().copied();
            self.flights_taken = saved_flights;

            if let Some(to) = escape {
                self.positions[adventurer] = to;
                events.push(GameEvent::Swam { adventurer, to });
            } else {
                events.push(GameEvent::Drowned { adventurer });
                self.ended = Some(Outcome::Lost(LossReason::Drowned { player: adventurer }));
                return;
            }
        }
    }
}
