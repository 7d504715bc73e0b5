extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use super::action::Action;
use super::actions::TREASURE_SET;
use super::board::Coord;
use super::cards::TreasureCard;
use super::state::TurnPhase;
use super::tile::{FOOLS_LANDING, Tile, Treasure};
use super::IslandGame;

impl IslandGame {
    /// Returns every action `player` may take right now.
    ///
    /// Only the active seat has actions. The list starts with ending the turn,
    /// then movement, shoring, card passes, treasure collection, Sandbags,
    /// Helicopter Lifts and lift-off. While a hand is over the limit the list
    /// holds only that hand's discards and the free Sandbags and Helicopter
    /// Lift plays.
    #[must_use]
    pub fn legal_actions(&self, player: usize) -> Vec<Action> {
        if player != self.turn {
            return Vec::new();
        }

        let mut actions = Vec::new();
        match self.phase() {
            TurnPhase::GameOver => {}
            TurnPhase::ForcedDiscard { player } => {
                actions.extend(self.discards(player));
                actions.extend(self.sandbag_plays());
                actions.extend(self.helicopter_lifts());
            }
            TurnPhase::Actions => {
                actions.push(Action::EndTurn { player });
                actions.extend(self.movements(player));
                actions.extend(self.shores(player));
                actions.extend(self.card_passes(player));
                actions.extend(self.treasure_collection(player));
                actions.extend(self.sandbag_plays());
                actions.extend(self.helicopter_lifts());
                actions.extend(self.lift_offs());
            }
        }
        actions
    }

    /// Tiles `player` could walk, fly or swim to on their own.
    pub(super) fn own_destinations(&self, player: usize) -> Vec<Coord> {
        let caps = self.roles[player].capabilities();
        let here = self.positions[player];

        let mut tiles = if caps.flies && self.flights_taken == 0 {
            self.board.all_other_tiles(here)
        } else {
            self.board.tiles_within(here, caps.moves)
        };
        if caps.swims {
            for tile in self.board.swim_destinations(here) {
                if !tiles.iter().any(|t| t.coord == tile.coord) {
                    tiles.push(tile);
                }
            }
        }

        standing(tiles)
    }

    fn movements(&self, player: usize) -> Vec<Action> {
        let mut moves: Vec<Action> = self
            .own_destinations(player)
            .into_iter()
            .map(|to| Action::Move {
                player,
                adventurer: player,
                to,
            })
            .collect();

        if let Some(reach) = self.roles[player].capabilities().moves_others {
            for (other, &from) in self.positions.iter().enumerate() {
                if other == player {
                    continue;
                }
                moves.extend(standing(self.board.tiles_in(from, reach)).into_iter().map(
                    |to| Action::Move {
                        player,
                        adventurer: other,
                        to,
                    },
                ));
            }
        }

        moves
    }

    fn shores(&self, player: usize) -> Vec<Action> {
        let caps = self.roles[player].capabilities();
        let candidates: Vec<Coord> = self
            .board
            .tiles_within(self.positions[player], caps.shores)
            .into_iter()
            .filter(|t| t.is_flooded())
            .map(|t| t.coord)
            .collect();

        let mut shores: Vec<Action> = candidates
            .iter()
            .map(|&tile| Action::Shore {
                player,
                tile,
                second: None,
            })
            .collect();

        if caps.shores_per_action > 1 {
            for (i, &tile) in candidates.iter().enumerate() {
                for &second in &candidates[i + 1..] {
                    shores.push(Action::Shore {
                        player,
                        tile,
                        second: Some(second),
                    });
                }
            }
        }

        shores
    }

    fn card_passes(&self, player: usize) -> Vec<Action> {
        let here = self.positions[player];
        let anywhere = self.roles[player].capabilities().passes_anywhere;
        let recipients: Vec<usize> = (0..self.player_count())
            .filter(|&other| other != player && (anywhere || self.positions[other] == here))
            .collect();

        let mut passes = Vec::new();
        for (card_index, card) in self.hands[player].iter().enumerate() {
            if !matches!(card, TreasureCard::Treasure(_)) {
                continue;
            }
            for &to in &recipients {
                passes.push(Action::PassCard {
                    from: player,
                    card_index,
                    to,
                });
            }
        }
        passes
    }

    fn treasure_collection(&self, player: usize) -> Option<Action> {
        let treasure = self.tile_of(player)?.treasure?;
        if self.collected.contains(&treasure) {
            return None;
        }
        if self.hands[player].count(&TreasureCard::Treasure(treasure)) < TREASURE_SET {
            return None;
        }
        Some(Action::CollectTreasure { player, treasure })
    }

    /// Every card of `kind` in every hand, as `(owner, card_index)`.
    fn cards_held(&self, kind: TreasureCard) -> Vec<(usize, usize)> {
        self.hands
            .iter()
            .enumerate()
            .flat_map(|(owner, hand)| {
                hand.iter()
                    .enumerate()
                    .filter(move |&(_, &card)| card == kind)
                    .map(move |(card_index, _)| (owner, card_index))
            })
            .collect()
    }

    fn sandbag_plays(&self) -> Vec<Action> {
        let flooded: Vec<Coord> = self
            .board
            .tiles()
            .filter(|t| t.is_flooded())
            .map(|t| t.coord)
            .collect();

        let mut plays = Vec::new();
        for (owner, card_index) in self.cards_held(TreasureCard::Sandbags) {
            for &tile in &flooded {
                plays.push(Action::PlaySandbags {
                    player: self.turn,
                    owner,
                    card_index,
                    tile,
                });
            }
        }
        plays
    }

    fn helicopter_lifts(&self) -> Vec<Action> {
        let cards = self.cards_held(TreasureCard::HelicopterLift);
        if cards.is_empty() {
            return Vec::new();
        }

        let mut groups: BTreeMap<Coord, Vec<usize>> = BTreeMap::new();
        for (seat, &coord) in self.positions.iter().enumerate() {
            groups.entry(coord).or_default().push(seat);
        }

        let mut lifts = Vec::new();
        for (owner, card_index) in cards {
            for (&from, seats) in &groups {
                let parties = subsets(seats);
                for to in standing(self.board.all_other_tiles(from)) {
                    for adventurers in &parties {
                        lifts.push(Action::PlayHeliLift {
                            player: self.turn,
                            owner,
                            card_index,
                            adventurers: adventurers.clone(),
                            from,
                            to,
                        });
                    }
                }
            }
        }
        lifts
    }

    fn lift_offs(&self) -> Vec<Action> {
        let Some(exit) = self.board.tile_named(FOOLS_LANDING) else {
            return Vec::new();
        };
        let everyone_aboard = self.positions.iter().all(|&p| p == exit.coord);
        if exit.is_sunken() || !everyone_aboard || self.collected.len() < Treasure::ALL.len() {
            return Vec::new();
        }
        self.cards_held(TreasureCard::HelicopterLift)
            .into_iter()
            .map(|(owner, card_index)| Action::LiftOff {
                player: self.turn,
                owner,
                card_index,
            })
            .collect()
    }

    fn discards(&self, player: usize) -> Vec<Action> {
        (0..self.hands[player].len())
            .map(|card_index| Action::Discard { player, card_index })
            .collect()
    }
}

/// Coordinates of the tiles that are still above water.
fn standing(tiles: Vec<&Tile>) -> Vec<Coord> {
    tiles
        .into_iter()
        .filter(|t| !t.is_sunken())
        .map(|t| t.coord)
        .collect()
}

/// Non-empty subsets of `seats`, smallest first.
fn subsets(seats: &[usize]) -> Vec<Vec<usize>> {
    let mut masks: Vec<u32> = (1..(1u32 << seats.len())).collect();
    masks.sort_by_key(|m| m.count_ones());
    masks
        .into_iter()
        .map(|mask| {
            seats
                .iter()
                .enumerate()
                .filter(|&(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, &seat)| seat)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn subsets_are_non_empty_and_complete() {
        let all = subsets(&[0, 2, 3]);
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], vec![0]);
        assert_eq!(all[6], vec![0, 2, 3]);
        assert!(all.iter().all(|s| !s.is_empty()));
    }
}
