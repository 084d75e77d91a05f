//! Skill gap dashboard — current vs required proficiency, transferable
//! strengths, and the prioritised list of skills still to build.
//!
//! All proficiency figures are percentages (0 – 100).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Priority {
    High,
    Medium,
}

/// One axis of the skills overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillScore {
    pub skill: &'static str,
    pub current: u32,
    pub required: u32,
}

impl SkillScore {
    pub fn gap(&self) -> u32 {
        self.required.saturating_sub(self.current)
    }

    pub fn meets_requirement(&self) -> bool {
        self.current >= self.required
    }
}

/// A skill the candidate is actively working toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGap {
    pub name: &'static str,
    pub progress: u32,
    pub target: u32,
    pub priority: Priority,
}

impl SkillGap {
    pub fn remaining(&self) -> u32 {
        self.target.saturating_sub(self.progress)
    }

    /// Progress toward target, rounded and capped at 100. Zero targets report 0.
    pub fn completion_pct(&self) -> u32 {
        if self.target == 0 {
            return 0;
        }
        let pct = (self.progress as f64 / self.target as f64 * 100.0).round() as u32;
        pct.min(100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransferableSkill {
    pub name: &'static str,
    pub description: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Response views
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SkillScoreView {
    pub skill: &'static str,
    pub current: u32,
    pub required: u32,
    pub gap: u32,
    pub meets_requirement: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGapView {
    pub name: &'static str,
    pub progress: u32,
    pub target: u32,
    pub priority: Priority,
    pub remaining: u32,
    pub completion_pct: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGapDashboard {
    pub overview: Vec<SkillScoreView>,
    pub transferable: Vec<TransferableSkill>,
    pub gaps: Vec<SkillGapView>,
}

const OVERVIEW: &[SkillScore] = &[
    SkillScore { skill: "Data Analysis", current: 85, required: 90 },
    SkillScore { skill: "Python", current: 75, required: 85 },
    SkillScore { skill: "Statistics", current: 70, required: 80 },
    SkillScore { skill: "GIS Tools", current: 25, required: 70 },
    SkillScore { skill: "Urban Planning", current: 20, required: 65 },
    SkillScore { skill: "Communication", current: 80, required: 75 },
];

const TRANSFERABLE: &[TransferableSkill] = &[
    TransferableSkill {
        name: "Data Analysis",
        description: "Your Excel and SQL skills translate directly to urban data work",
    },
    TransferableSkill {
        name: "Problem Solving",
        description: "Analytical thinking is core to city operations optimization",
    },
    TransferableSkill {
        name: "Communication",
        description: "Presenting insights to stakeholders is crucial in public sector",
    },
    TransferableSkill {
        name: "Project Management",
        description: "Managing timelines helps coordinate urban initiatives",
    },
];

const GAPS: &[SkillGap] = &[
    SkillGap { name: "GIS Tools", progress: 25, target: 70, priority: Priority::High },
    SkillGap { name: "Urban Planning Basics", progress: 20, target: 65, priority: Priority::High },
    SkillGap { name: "Transportation Modeling", progress: 15, target: 60, priority: Priority::Medium },
    SkillGap { name: "IoT & Sensors", progress: 30, target: 55, priority: Priority::Medium },
];

/// Orders gaps High priority first, then by most ground left to cover.
/// Stable, so equal entries keep catalog order.
pub fn prioritise(gaps: &[SkillGap]) -> Vec<SkillGap> {
    let mut ordered = gaps.to_vec();
    ordered.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| b.remaining().cmp(&a.remaining()))
    });
    ordered
}

pub fn dashboard() -> SkillGapDashboard {
    SkillGapDashboard {
        overview: OVERVIEW
            .iter()
            .map(|s| SkillScoreView {
                skill: s.skill,
                current: s.current,
                required: s.required,
                gap: s.gap(),
                meets_requirement: s.meets_requirement(),
            })
            .collect(),
        transferable: TRANSFERABLE.to_vec(),
        gaps: prioritise(GAPS)
            .into_iter()
            .map(|g| SkillGapView {
                name: g.name,
                progress: g.progress,
                target: g.target,
                priority: g.priority,
                remaining: g.remaining(),
                completion_pct: g.completion_pct(),
            })
            .collect(),
    }
}
