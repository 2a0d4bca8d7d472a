#![forbid(unsafe_code)]

//! Static copy for the explanatory sections.
//!
//! Pure data; the showcase decides how to lay it out.

/// Heading block at the top of a section.
#[derive(Debug, Clone, Copy)]
pub struct SectionHeader {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub lede: &'static str,
}

/// A big number with a caption.
#[derive(Debug, Clone, Copy)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

/// One side of an impact comparison bar.
#[derive(Debug, Clone, Copy)]
pub struct BarValue {
    /// Bar fill, 0-100.
    pub fill_pct: u8,
    pub label: &'static str,
}

/// Before/after comparison card.
#[derive(Debug, Clone, Copy)]
pub struct ImpactCard {
    pub title: &'static str,
    pub improvement: &'static str,
    pub traditional: BarValue,
    pub deterministic: BarValue,
    pub note: &'static str,
}

/// Benchmark row under one load condition.
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    pub scenario: &'static str,
    pub deterministic_success: &'static str,
    pub traditional_success: &'static str,
    pub deterministic_latency: &'static str,
    pub traditional_latency: &'static str,
}

/// Step in the execution pipeline diagram.
#[derive(Debug, Clone, Copy)]
pub struct FlowStep {
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static [(&'static str, &'static str)],
}

/// Capacity split between reservation kinds.
#[derive(Debug, Clone, Copy)]
pub struct Allocation {
    pub aot_pct: u8,
    pub jit_pct: u8,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub title: &'static str,
    pub summary: &'static str,
    pub items: &'static [&'static str],
}

/// Problem or remedy card with a short checklist.
#[derive(Debug, Clone, Copy)]
pub struct ContrastCard {
    pub title: &'static str,
    pub summary: &'static str,
    pub points: &'static [&'static str],
    /// `true` for the remedy side.
    pub remedy: bool,
}

/// One column of the auction comparison: ordered steps from submit to outcome.
#[derive(Debug, Clone, Copy)]
pub struct AuctionFlow {
    pub title: &'static str,
    pub steps: &'static [&'static str],
    /// Index of the first step whose outcome is uncertain, if any.
    pub uncertain_from: Option<usize>,
}

/// Industry use case.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub industry: &'static str,
    pub points: &'static [&'static str],
}

/// Infrastructure component card.
#[derive(Debug, Clone, Copy)]
pub struct Component {
    pub title: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
}

/// Integration example: a short snippet and what it buys.
#[derive(Debug, Clone, Copy)]
pub struct Integration {
    pub title: &'static str,
    pub snippet: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

pub const HERO: SectionHeader = SectionHeader {
    eyebrow: "Slot Storyboard",
    title: "What happens when execution is guaranteed?",
    lede: "How deterministic slot reservations turn high-stakes workflows from probabilistic \
           chaos into predictable operations.",
};

pub const COMPARISON: SectionHeader = SectionHeader {
    eyebrow: "The Difference",
    title: "Side-by-Side Execution Comparison",
    lede: "The same workflow with deterministic reservations versus public mempool competition.",
};

pub const IMPACT: SectionHeader = SectionHeader {
    eyebrow: "The Impact",
    title: "Quantified Difference",
    lede: "Deterministic execution removes the failure cliff that appears under congestion.",
};

pub const ARCHITECTURE: SectionHeader = SectionHeader {
    eyebrow: "Infrastructure",
    title: "How Reserved Slots Reach the Block Leader",
    lede: "Transactions are routed, scheduled, and confirmed before they reach the validator \
           network, then delivered as bundles for guaranteed inclusion.",
};

pub const FAQ: SectionHeader = SectionHeader {
    eyebrow: "Frequently Asked Questions",
    title: "Understanding Deterministic Execution",
    lede: "Common questions about how slot reservations work and what they enable.",
};

pub const ROADMAP: SectionHeader = SectionHeader {
    eyebrow: "Roadmap",
    title: "What's Coming Next",
    lede: "Core infrastructure ships in stages; here is what builders can expect.",
};

pub const MARKETS: SectionHeader = SectionHeader {
    eyebrow: "Educational Deep Dive",
    title: "MEV Mitigation & Blockspace Auctions",
    lede: "How deterministic reservations remove front-running and make blockspace markets \
           fair and transparent.",
};

pub const USE_CASES: SectionHeader = SectionHeader {
    eyebrow: "Use Cases",
    title: "Deterministic Execution Across Industries",
    lede: "What guaranteed slots unlock in finance, AI, gaming, and DePIN.",
};

pub const TECHNICAL: SectionHeader = SectionHeader {
    eyebrow: "Technical Deep Dive",
    title: "How Execution Is Guaranteed",
    lede: "The coordination engine, slot marketplace, and node architecture behind \
           deterministic execution.",
};

pub const HEADLINE_METRICS: [Metric; 4] = [
    Metric {
        value: "100%",
        label: "SUCCESS RATE",
    },
    Metric {
        value: "<30ms",
        label: "PRE-CONFIRM",
    },
    Metric {
        value: "0",
        label: "RETRIES NEEDED",
    },
    Metric {
        value: "500+",
        label: "GLOBAL NODES",
    },
];

pub const IMPACT_CARDS: [ImpactCard; 4] = [
    ImpactCard {
        title: "Success Rate",
        improvement: "+72%",
        traditional: BarValue {
            fill_pct: 58,
            label: "58%",
        },
        deterministic: BarValue {
            fill_pct: 100,
            label: "100%",
        },
        note: "The mempool drops 42% of transactions under congestion; reservations land every one.",
    },
    ImpactCard {
        title: "Average Latency",
        improvement: "-97%",
        traditional: BarValue {
            fill_pct: 100,
            label: "1,250ms",
        },
        deterministic: BarValue {
            fill_pct: 3,
            label: "33ms",
        },
        note: "Sub-30ms pre-confirmations vs 450ms-2.5s validator inclusion delays.",
    },
    ImpactCard {
        title: "Retry Overhead",
        improvement: "-100%",
        traditional: BarValue {
            fill_pct: 100,
            label: "17 retries",
        },
        deterministic: BarValue {
            fill_pct: 0,
            label: "0 retries",
        },
        note: "Retries are handled upstream, so applications carry no retry logic.",
    },
    ImpactCard {
        title: "Cost Efficiency",
        improvement: "+126%",
        traditional: BarValue {
            fill_pct: 42,
            label: "42%",
        },
        deterministic: BarValue {
            fill_pct: 95,
            label: "95%",
        },
        note: "No fees wasted on failed transactions or priority-fee bidding wars.",
    },
];

pub const BENCHMARKS: [Benchmark; 3] = [
    Benchmark {
        scenario: "Normal load",
        deterministic_success: "100%",
        traditional_success: "85%",
        deterministic_latency: "28ms",
        traditional_latency: "450ms",
    },
    Benchmark {
        scenario: "High congestion",
        deterministic_success: "100%",
        traditional_success: "58%",
        deterministic_latency: "33ms",
        traditional_latency: "1,250ms",
    },
    Benchmark {
        scenario: "Extreme stress",
        deterministic_success: "100%",
        traditional_success: "42%",
        deterministic_latency: "35ms",
        traditional_latency: "2,500ms+",
    },
];

pub const FLOW_STEPS: [FlowStep; 4] = [
    FlowStep {
        title: "1. Transaction Submission",
        summary: "The application submits transactions to the coordination layer.",
        details: &[
            ("AOT", "Reserve slots up to 60s ahead"),
            ("JIT", "Immediate slot allocation for urgent actions"),
        ],
    },
    FlowStep {
        title: "2. Node Processing",
        summary: "Routes, schedules, and confirms transactions before the validator network.",
        details: &[
            ("Retry Logic", "Handled upstream automatically"),
            ("Ordering", "Application-controlled sequencing"),
        ],
    },
    FlowStep {
        title: "3. Sidecar Delivery",
        summary: "Bundles are delivered directly to the block leader's processing unit.",
        details: &[
            ("Latency", "Sub-30ms pre-confirmations"),
            ("Guarantee", "Deterministic inclusion"),
        ],
    },
    FlowStep {
        title: "4. Guaranteed Execution",
        summary: "Transactions execute in exact order at the specified time.",
        details: &[
            ("Success Rate", "100% guaranteed"),
            ("Timing", "Predictable to the millisecond"),
        ],
    },
];

pub const ALLOCATION: Allocation = Allocation {
    aot_pct: 60,
    jit_pct: 40,
    note: "Capacity shifts with demand so neither scheduled nor reactive work starves the other.",
};

pub const FAQ_ENTRIES: [FaqEntry; 6] = [
    FaqEntry {
        question: "What's the difference between AOT and JIT slots?",
        answer: "AOT (Ahead-of-Time) slots are reserved up to 60 seconds in advance, suited to \
                 scheduled work like batch settlements or mints. JIT (Just-in-Time) slots are \
                 reserved the moment they are needed, suited to liquidations or emergency responses.",
    },
    FaqEntry {
        question: "How is execution guaranteed?",
        answer: "The same validators that secure the chain are used, but execution is coordinated \
                 through a scheduling engine. Reserving slots in the slot marketplace gives \
                 guaranteed inclusion regardless of network congestion.",
    },
    FaqEntry {
        question: "What happens if a transaction fails?",
        answer: "Coordination nodes retry upstream. The application carries no custom retry logic; \
                 the infrastructure either lands the transaction or reports a clear failure.",
    },
    FaqEntry {
        question: "Does it work with existing tooling?",
        answer: "Yes. A lite integration takes as little as two lines of code, and the validator \
                 sidecar runs alongside existing validator clients.",
    },
    FaqEntry {
        question: "How does this eliminate MEV?",
        answer: "Applications control ordering through reserved slots, removing the opaque \
                 priority-fee auctions that enable extraction. Transactions execute in the exact \
                 order builders specify.",
    },
    FaqEntry {
        question: "What does it cost?",
        answer: "A transparent slot marketplace prices blockspace on demand. Costs are predictable \
                 and typically lower than priority-fee bidding wars during congestion.",
    },
];

pub const ROADMAP_MILESTONES: [Milestone; 3] = [
    Milestone {
        title: "Current: Development & Documentation",
        summary: "Infrastructure is in active development with documentation for builders and \
                  node operators.",
        items: &[
            "Infrastructure documentation live",
            "Builder program applications open",
            "Node operator guides available",
            "Concepts and use cases documented",
        ],
    },
    Milestone {
        title: "Next: Testnet Private Beta",
        summary: "Private beta on testnet with the modified validator and sidecar.",
        items: &[
            "Testnet private beta launch",
            "Modified validator on testnet",
            "Sidecar deployment",
            "Early SDK access for beta participants",
        ],
    },
    Milestone {
        title: "Later: Mainnet Release",
        summary: "Full mainnet deployment with production-grade reliability.",
        items: &[
            "Mainnet deployment",
            "Production SDK release",
            "Institutional-grade SLAs",
            "Global node network expansion",
        ],
    },
];

pub const MEV_CARDS: [ContrastCard; 2] = [
    ContrastCard {
        title: "The MEV Problem",
        summary: "Public mempools expose transactions to front-running. Large swaps get \
                  sandwiched, mints get front-run, and users lose value to bots.",
        points: &[
            "Opaque priority fee auctions",
            "Transaction ordering uncertainty",
            "MEV extraction opportunities",
        ],
        remedy: false,
    },
    ContrastCard {
        title: "Reserved Slots",
        summary: "Reserved slots with deterministic ordering leave no window for \
                  front-running. Transactions execute in the sequence builders specify.",
        points: &[
            "Application-controlled ordering",
            "Transparent slot marketplace",
            "Zero MEV extraction windows",
        ],
        remedy: true,
    },
];

pub const AUCTION_FLOWS: [AuctionFlow; 2] = [
    AuctionFlow {
        title: "Priority Fee Auction",
        steps: &[
            "Transaction submitted to mempool",
            "MEV bots scan and front-run",
            "Uncertain inclusion timing",
            "May fail or execute out of order",
        ],
        uncertain_from: Some(2),
    },
    AuctionFlow {
        title: "Slot Reservation",
        steps: &[
            "Reserve slot 60s ahead (AOT)",
            "Deterministic execution window",
            "Sub-30ms pre-confirmation",
            "Guaranteed inclusion in exact order",
        ],
        uncertain_from: None,
    },
];

pub const SCENARIOS: [Scenario; 4] = [
    Scenario {
        industry: "Finance & DeFi",
        points: &[
            "400ms guaranteed liquidations prevent bad debt",
            "High-frequency trading with microsecond precision",
            "Institutional settlement with regulatory compliance",
        ],
    },
    Scenario {
        industry: "AI & Agents",
        points: &[
            "500+ nodes route inference where agents live",
            "JIT slots for unpredictable AI surges",
            "Stateless, deterministic agent pipelines",
        ],
    },
    Scenario {
        industry: "Gaming",
        points: &[
            "Atomic state updates for multiplayer sync",
            "Fair NFT drops with AOT guarantees",
            "JIT slots absorb spike events",
        ],
    },
    Scenario {
        industry: "DePIN",
        points: &[
            "Guaranteed energy dispatch windows",
            "Deterministic sensor upload scheduling",
            "Emergency response with JIT capacity",
        ],
    },
];

pub const INTEGRATIONS: [Integration; 3] = [
    Integration {
        title: "NFT Minting Platform",
        snippet: &[
            "// schedule the mint batch 60s ahead",
            "slot = reserve(AOT, delay: 60, mint_batch)",
            "slot.execute()",
        ],
        benefits: &[
            "Eliminates front-running",
            "Guarantees fair ordering",
            "No priority fee wars",
        ],
    },
    Integration {
        title: "DeFi Liquidation Bot",
        snippet: &[
            "// JIT slot for immediate liquidation",
            "slot = reserve(JIT, priority: high)",
            "if health < threshold: slot.execute(tx)",
        ],
        benefits: &[
            "400ms guaranteed execution",
            "Prevents bad debt accumulation",
            "No retry logic needed",
        ],
    },
    Integration {
        title: "High-Frequency Trading",
        snippet: &[
            "// reserve a ladder of slots",
            "slots = reserve_ladder(AOT, 10, 20, 30)",
            "for slot in slots: slot.execute(trade)",
        ],
        benefits: &[
            "Microsecond precision",
            "Zero MEV extraction",
            "Deterministic order matching",
        ],
    },
];

pub const COMPONENTS: [Component; 7] = [
    Component {
        title: "Coordination Engine",
        summary: "Runs slot auctions and transaction scheduling, and guarantees inclusion \
                  through block building on the validators that already secure the chain.",
        features: &[
            "Real-time slot availability tracking",
            "Deterministic transaction ordering",
            "Global node coordination",
            "Reliability under extreme pressure",
        ],
    },
    Component {
        title: "Slot Marketplace",
        summary: "A two-sided market that turns blockspace from an unpredictable commodity \
                  into a guaranteed, programmable resource.",
        features: &[
            "AOT reservations up to 60s ahead",
            "JIT slots for reactive workloads",
            "Dynamic pricing based on demand",
            "Transparent blockspace trading",
        ],
    },
    Component {
        title: "Coordination Node",
        summary: "Routes, schedules, and confirms transactions before they reach the \
                  validator network, handling retries upstream.",
        features: &[
            "Routes transactions to the engine",
            "Automatic retry orchestration",
            "Failure detection and recovery",
            "Zero app-side retry code",
        ],
    },
    Component {
        title: "Validator Sidecar",
        summary: "A lightweight process beside the validator that lets operators sell \
                  tailored blockspace directly to builders.",
        features: &[
            "Runs alongside existing validators",
            "Compatible with alternative clients",
            "MEV-free revenue opportunities",
            "Real-time capacity analytics",
        ],
    },
    Component {
        title: "Modified Validator",
        summary: "A validator build that integrates with the coordination engine for \
                  deterministic execution.",
        features: &[
            "Patched reference validator",
            "Native engine integration",
            "Guaranteed block inclusion",
            "Testnet first, then mainnet",
        ],
    },
    Component {
        title: "Global Accounts",
        summary: "Shared state coordination for external execution environments, enabling \
                  architectures that span several execution contexts.",
        features: &[
            "External execution environments",
            "Shared state coordination",
            "Cross-chain settlement",
            "Hybrid compute workloads",
        ],
    },
    Component {
        title: "Lite Mode",
        summary: "Integrate with as little as two lines of code: reserve slots and start \
                  building with execution guarantees.",
        features: &[
            "Minimal integration overhead",
            "Two-line integration",
            "Progressive enhancement path",
            "Works with existing tooling",
        ],
    },
];

/// Closing call to action under the component grid.
pub const TECHNICAL_CTA: &str =
    "Ready to build with certainty? The builder program offers early SDK access and \
     validator integration support.";
