use serde::Serialize;

use crate::dto::player_dto::Player;

/// Named positions of the 4-3-3 template, in display order.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    #[serde(rename = "LW")]
    LeftWing,
    #[serde(rename = "ST")]
    Striker,
    #[serde(rename = "RW")]
    RightWing,
    #[serde(rename = "CM_left")]
    CentralMidLeft,
    #[serde(rename = "CAM")]
    AttackingMid,
    #[serde(rename = "CM_right")]
    CentralMidRight,
    #[serde(rename = "LB")]
    LeftBack,
    #[serde(rename = "CB1")]
    CentreBackOne,
    #[serde(rename = "CB2")]
    CentreBackTwo,
    #[serde(rename = "RB")]
    RightBack,
    #[serde(rename = "GK")]
    Goalkeeper,
}

impl Slot {
    pub const COUNT: usize = 11;

    pub const ALL: [Slot; Slot::COUNT] = [
        Slot::LeftWing,
        Slot::Striker,
        Slot::RightWing,
        Slot::CentralMidLeft,
        Slot::AttackingMid,
        Slot::CentralMidRight,
        Slot::LeftBack,
        Slot::CentreBackOne,
        Slot::CentreBackTwo,
        Slot::RightBack,
        Slot::Goalkeeper,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        match self {
            Slot::LeftWing => "LW",
            Slot::Striker => "ST",
            Slot::RightWing => "RW",
            Slot::CentralMidLeft => "CM_left",
            Slot::AttackingMid => "CAM",
            Slot::CentralMidRight => "CM_right",
            Slot::LeftBack => "LB",
            Slot::CentreBackOne => "CB1",
            Slot::CentreBackTwo => "CB2",
            Slot::RightBack => "RB",
            Slot::Goalkeeper => "GK",
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SlotAssignment {
    pub slot: Slot,
    pub player: Player,
}

/// A complete starting eleven. Only the selector builds one, and only with every slot filled.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Formation {
    assignments: Vec<SlotAssignment>,
}

impl Formation {
    pub(crate) fn from_players(players: [Player; Slot::COUNT]) -> Self {
        let assignments = Slot::ALL
            .into_iter()
            .zip(players)
            .map(|(slot, player)| SlotAssignment { slot, player })
            .collect();

        Self { assignments }
    }

    pub fn assignments(&self) -> &[SlotAssignment] {
        &self.assignments
    }

    pub fn player(&self, slot: Slot) -> &Player {
        &self.assignments[slot.index()].player
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupView {
    pub team_name: String,
    pub season: i32,
    pub formation: Option<Formation>,
}
