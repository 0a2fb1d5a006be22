/// One rung of the performance ladder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stratum {
    pub threshold: f64,
    pub name: &'static str,
    pub description: &'static str,
}

/// The ladder, highest threshold first. Classification scans top-down and
/// takes the first rung at or below the score, so 0 is the floor for every
/// non-negative score - there are no gaps.
pub const STRATA: [Stratum; 8] = [
    Stratum {
        threshold: 140.0,
        name: "Titan Class",
        description: "Beyond cutting-edge systems",
    },
    Stratum {
        threshold: 120.0,
        name: "Quantum Elite",
        description: "Flagship workstations",
    },
    Stratum {
        threshold: 100.0,
        name: "Dragonfire",
        description: "Extreme gaming rigs",
    },
    Stratum {
        threshold: 80.0,
        name: "Phoenix",
        description: "Enthusiast systems",
    },
    Stratum {
        threshold: 60.0,
        name: "Griffin",
        description: "Premium devices",
    },
    Stratum {
        threshold: 40.0,
        name: "Basilisk",
        description: "Productivity systems",
    },
    Stratum {
        threshold: 20.0,
        name: "Chimera",
        description: "Basic computing",
    },
    Stratum {
        threshold: 0.0,
        name: "Ancient",
        description: "Legacy hardware",
    },
];

/// Where scores below the ladder floor land. The shipped formulas cannot
/// produce one, but a negative score must still classify cleanly.
pub const UNCLASSIFIED: Stratum = Stratum {
    threshold: f64::NEG_INFINITY,
    name: "Unclassified",
    description: "Unknown category",
};

/// Map a temporal score onto the ladder.
pub fn classify(score: f64) -> &'static Stratum {
    STRATA
        .iter()
        .find(|stratum| score >= stratum.threshold)
        .unwrap_or(&UNCLASSIFIED)
}
