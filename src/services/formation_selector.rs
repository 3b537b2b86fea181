use std::cmp::Reverse;

use tracing::debug;

use crate::dto::{formation_dto::{Formation, Slot}, player_dto::Player};

/// Groups of position codes a slot accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionGroup {
    Goalkeeper,
    LeftBack,
    CentreBack,
    RightBack,
    Midfield,
    LeftWing,
    Striker,
    RightWing,
}

impl PositionGroup {
    pub fn codes(self) -> &'static [&'static str] {
        match self {
            PositionGroup::Goalkeeper => &["GK"],
            PositionGroup::LeftBack => &["LB", "LWB"],
            PositionGroup::CentreBack => &["CB"],
            PositionGroup::RightBack => &["RB", "RWB"],
            PositionGroup::Midfield => &["CM", "CDM", "CAM", "DM", "AM"],
            PositionGroup::LeftWing => &["LW", "LM"],
            PositionGroup::Striker => &["ST", "CF", "FW"],
            PositionGroup::RightWing => &["RW", "RM"],
        }
    }

    pub fn admits(self, player: &Player) -> bool {
        holds_any(player, self.codes())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MidfieldRole {
    Attacking,
    Defensive,
    Central,
}

fn holds_any(player: &Player, codes: &[&str]) -> bool {
    player.positions.iter().any(|position| {
        let position = position.to_uppercase();
        codes.iter().any(|code| position.contains(code))
    })
}

fn midfield_role(player: &Player) -> MidfieldRole {
    if holds_any(player, &["CAM", "AM"]) {
        MidfieldRole::Attacking
    } else if holds_any(player, &["CDM", "DM"]) {
        MidfieldRole::Defensive
    } else {
        MidfieldRole::Central
    }
}

/// Picks the most-used 4-3-3 starting eleven from a roster.
///
/// Groups are filled in the order GK, LB, CB, RB, midfield, LW, ST, RW. Each
/// group only sees players no earlier group took, ranked by minutes with
/// roster order breaking ties. Returns `None` unless all eleven slots end up
/// with distinct players.
pub fn select_formation(roster: &[Player]) -> Option<Formation> {
    if roster.is_empty() {
        debug!("Empty roster, no formation.");
        return None;
    }

    let mut selection = Selection::new(roster);

    selection.fill(PositionGroup::Goalkeeper, &[Slot::Goalkeeper]);
    selection.fill(PositionGroup::LeftBack, &[Slot::LeftBack]);
    selection.fill(PositionGroup::CentreBack, &[Slot::CentreBackOne, Slot::CentreBackTwo]);
    selection.fill(PositionGroup::RightBack, &[Slot::RightBack]);

    if !selection.fill_midfield() {
        return None;
    }

    selection.fill(PositionGroup::LeftWing, &[Slot::LeftWing]);
    selection.fill(PositionGroup::Striker, &[Slot::Striker]);
    selection.fill(PositionGroup::RightWing, &[Slot::RightWing]);

    selection.finish()
}

struct Selection<'a> {
    roster: &'a [Player],
    taken: Vec<bool>,
    slots: [Option<usize>; Slot::COUNT],
}

impl<'a> Selection<'a> {
    fn new(roster: &'a [Player]) -> Self {
        Self {
            roster,
            taken: vec![false; roster.len()],
            slots: [None; Slot::COUNT],
        }
    }

    /// Untaken players eligible for `group`, most minutes first.
    fn ranked(&self, group: PositionGroup) -> Vec<usize> {
        let mut candidates: Vec<usize> = (0..self.roster.len())
            .filter(|&i| !self.taken[i] && group.admits(&self.roster[i]))
            .collect();

        // stable, so roster order survives among equal minutes
        candidates.sort_by_key(|&i| Reverse(self.roster[i].minutes_played));

        if let [first, second, ..] = candidates[..] {
            let (a, b) = (&self.roster[first], &self.roster[second]);
            if a.minutes_played == b.minutes_played {
                debug!(
                    "{:?} tie at {} minutes: {} ahead of {} on roster order",
                    group, a.minutes_played, a.full_name, b.full_name
                );
            }
        }

        candidates
    }

    fn assign(&mut self, slot: Slot, index: usize) {
        debug!(
            "{} -> {} ({} min)",
            slot.code(),
            self.roster[index].full_name,
            self.roster[index].minutes_played
        );
        self.slots[slot.index()] = Some(index);
        self.taken[index] = true;
    }

    fn fill(&mut self, group: PositionGroup, slots: &[Slot]) {
        let ranked = self.ranked(group);

        for (&slot, &index) in slots.iter().zip(ranked.iter()) {
            self.assign(slot, index);
        }

        for slot in slots.iter().skip(ranked.len()) {
            debug!("No {:?} candidate left for {}", group, slot.code());
        }
    }

    fn fill_midfield(&mut self) -> bool {
        let ranked = self.ranked(PositionGroup::Midfield);

        let trio = match ranked[..] {
            [a, b, c, ..] => [a, b, c],
            _ => {
                debug!("Only {} midfielders available, need 3", ranked.len());
                return false;
            }
        };

        let [left, centre, right] = self.arrange_midfield(trio);
        self.assign(Slot::CentralMidLeft, left);
        self.assign(Slot::AttackingMid, centre);
        self.assign(Slot::CentralMidRight, right);
        true
    }

    /// Left, centre, right. A player whose role nobody else in the trio
    /// shares takes the centre; without exactly one such player the trio
    /// keeps its minutes order.
    fn arrange_midfield(&self, trio: [usize; 3]) -> [usize; 3] {
        let roles = trio.map(|i| midfield_role(&self.roster[i]));

        let odd_ones: Vec<usize> = (0..3)
            .filter(|&k| roles.iter().filter(|&&r| r == roles[k]).count() == 1)
            .collect();

        match odd_ones[..] {
            [odd] => {
                let others: Vec<usize> = (0..3).filter(|&k| k != odd).map(|k| trio[k]).collect();
                [others[0], trio[odd], others[1]]
            }
            _ => trio,
        }
    }

    fn finish(self) -> Option<Formation> {
        let mut chosen = Vec::with_capacity(Slot::COUNT);

        for slot in Slot::ALL {
            match self.slots[slot.index()] {
                Some(index) => chosen.push(index),
                None => {
                    debug!("Slot {} unfilled, no formation.", slot.code());
                    return None;
                }
            }
        }

        let mut distinct = chosen.clone();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() != Slot::COUNT {
            return None;
        }

        let players: Vec<Player> = chosen.into_iter().map(|i| self.roster[i].clone()).collect();
        let players: [Player; Slot::COUNT] = players.try_into().ok()?;

        Some(Formation::from_players(players))
    }
}
