//! Static insight copy for each maturity tier and the plain-text summary
//! renderer behind the local "save summary" export.

use super::catalog::category_max;
use super::models::{Category, MaturityLevel, Question, ScoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Article,
    Template,
    Checklist,
    Guide,
}

impl ResourceKind {
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Article => "article",
            ResourceKind::Template => "template",
            ResourceKind::Checklist => "checklist",
            ResourceKind::Guide => "guide",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Resource {
    pub title: &'static str,
    pub description: &'static str,
    pub kind: ResourceKind,
}

/// Tier-specific copy shown on the results screen and in the exported
/// summary.
#[derive(Debug, Clone, Copy)]
pub struct MaturityInsight {
    pub level: MaturityLevel,
    pub description: &'static str,
    pub key_strengths: &'static [&'static str],
    pub priority_actions: &'static [&'static str],
    pub resources: &'static [Resource],
}

pub fn insight_for(level: MaturityLevel) -> &'static MaturityInsight {
    match level {
        MaturityLevel::Foundational => &FOUNDATIONAL,
        MaturityLevel::Developing => &DEVELOPING,
        MaturityLevel::Established => &ESTABLISHED,
        MaturityLevel::Advanced => &ADVANCED,
    }
}

static FOUNDATIONAL: MaturityInsight = MaturityInsight {
    level: MaturityLevel::Foundational,
    description: "Your customer success function is in its early stages. You have basic \
        processes but significant opportunity exists to build more structured, scalable \
        practices.",
    key_strengths: &[
        "You have recognized the importance of customer success",
        "Basic customer communication is in place",
        "There is awareness of the need for improvement",
    ],
    priority_actions: &[
        "Establish a formal onboarding process with clear milestones",
        "Implement basic customer health scoring",
        "Set up regular check-in cadences with customers",
        "Define key customer success metrics and KPIs",
        "Create customer journey mapping documentation",
    ],
    resources: &[
        Resource {
            title: "Customer Success Fundamentals Checklist",
            description: "Essential elements every CS team needs to establish",
            kind: ResourceKind::Checklist,
        },
        Resource {
            title: "Building Your First Health Score",
            description: "Step-by-step guide to creating customer health metrics",
            kind: ResourceKind::Guide,
        },
        Resource {
            title: "Onboarding Process Template",
            description: "Ready-to-use framework for customer onboarding",
            kind: ResourceKind::Template,
        },
    ],
};

static DEVELOPING: MaturityInsight = MaturityInsight {
    level: MaturityLevel::Developing,
    description: "You have established some customer success practices but need more \
        consistency and depth. Focus on standardizing processes and improving data-driven \
        decision making.",
    key_strengths: &[
        "Basic customer success processes are established",
        "Some customer health monitoring is in place",
        "Regular customer communication occurs",
    ],
    priority_actions: &[
        "Standardize and document all customer success processes",
        "Implement more sophisticated health scoring with automation",
        "Establish formal QBR processes and templates",
        "Begin tracking leading indicators of customer success",
        "Create playbooks for common customer scenarios",
    ],
    resources: &[
        Resource {
            title: "CS Process Standardization Guide",
            description: "How to create consistent, repeatable CS processes",
            kind: ResourceKind::Guide,
        },
        Resource {
            title: "Advanced Health Scoring Framework",
            description: "Multi-dimensional approach to customer health",
            kind: ResourceKind::Template,
        },
        Resource {
            title: "QBR Excellence Toolkit",
            description: "Templates and best practices for impactful QBRs",
            kind: ResourceKind::Template,
        },
    ],
};

static ESTABLISHED: MaturityInsight = MaturityInsight {
    level: MaturityLevel::Established,
    description: "You have a solid customer success foundation with good practices in \
        place. Focus on optimization, advanced analytics, and proactive customer \
        management.",
    key_strengths: &[
        "Structured processes and workflows are established",
        "Customer health monitoring is systematic",
        "Regular QBRs and strategic conversations occur",
        "Data-driven decision making is present",
    ],
    priority_actions: &[
        "Implement predictive analytics for churn prevention",
        "Develop advanced segmentation strategies",
        "Create automated workflows for common CS activities",
        "Build cross-functional alignment with sales and product",
        "Establish customer advocacy and expansion programs",
    ],
    resources: &[
        Resource {
            title: "Predictive Analytics in Customer Success",
            description: "Using data to predict and prevent churn",
            kind: ResourceKind::Guide,
        },
        Resource {
            title: "Customer Segmentation Strategies",
            description: "Advanced approaches to customer categorization",
            kind: ResourceKind::Article,
        },
        Resource {
            title: "CS-Sales Alignment Framework",
            description: "Building effective cross-team collaboration",
            kind: ResourceKind::Template,
        },
    ],
};

static ADVANCED: MaturityInsight = MaturityInsight {
    level: MaturityLevel::Advanced,
    description: "You have a sophisticated customer success operation with data-driven \
        processes and AI integration. Focus on innovation, scaling excellence, and \
        industry leadership.",
    key_strengths: &[
        "Advanced analytics and AI are integrated into workflows",
        "Predictive customer success management is operational",
        "Strong cross-functional alignment exists",
        "Customer success directly drives business growth",
    ],
    priority_actions: &[
        "Develop industry-leading customer success innovations",
        "Build strategic customer advisory programs",
        "Create thought leadership content and speak at industry events",
        "Mentor other CS teams and share best practices",
        "Explore emerging technologies for CS enhancement",
    ],
    resources: &[
        Resource {
            title: "CS Innovation Playbook",
            description: "Strategies for pioneering new CS approaches",
            kind: ResourceKind::Guide,
        },
        Resource {
            title: "Building Customer Advisory Boards",
            description: "Creating strategic customer partnership programs",
            kind: ResourceKind::Template,
        },
        Resource {
            title: "Thought Leadership in CS",
            description: "Establishing your team as industry experts",
            kind: ResourceKind::Article,
        },
    ],
};

/// Qualitative commentary for one category, banded on the share of attainable
/// points earned: 80% and up is excellent, 60% and up is good, anything lower
/// needs work.
pub fn category_commentary(category: Category, percentage: u8) -> &'static str {
    let (excellent, good, needs_improvement) = match category {
        Category::Onboarding => (
            "Your onboarding process is well-structured and effective at setting customers up for success.",
            "Your onboarding has solid foundations but could benefit from more personalization and milestone tracking.",
            "Your onboarding process needs significant enhancement to ensure customer success from day one.",
        ),
        Category::CustomerOutcomes => (
            "You excel at tracking and delivering measurable customer outcomes and value.",
            "You track some customer outcomes but could improve measurement and value demonstration.",
            "Focus on establishing clear outcome metrics and value demonstration processes.",
        ),
        Category::Qbrs => (
            "Your QBR process drives strategic conversations and deepens customer relationships.",
            "Your QBRs are regular but could be more strategic and outcome-focused.",
            "Implement a structured QBR process to create strategic customer touchpoints.",
        ),
        Category::AiUtilization => (
            "You leverage AI effectively to enhance customer success operations and insights.",
            "You use some AI tools but have opportunities to expand automation and insights.",
            "Consider implementing AI tools to scale your customer success efforts and gain better insights.",
        ),
        Category::OverallStrategy => (
            "Your customer success strategy is comprehensive and well-integrated with business objectives.",
            "Your strategy is solid but could benefit from better alignment and more proactive planning.",
            "Develop a more strategic approach to customer success with clear goals and metrics.",
        ),
    };

    if percentage >= 80 {
        excellent
    } else if percentage >= 60 {
        good
    } else {
        needs_improvement
    }
}

/// Renders the downloadable plain-text report: tier, total, description,
/// priority actions, and the category breakdown with commentary. Pure
/// formatting over the score result and the static tables.
pub fn render_summary(result: &ScoreResult, catalog: &[Question]) -> String {
    let mut out = String::new();
    out.push_str("CUSTOMER SUCCESS MATURITY ASSESSMENT\n");
    out.push_str("====================================\n\n");
    out.push_str(&format!("Maturity level: {}\n", result.level_label()));
    out.push_str(&format!("Total score: {} / 50\n\n", result.total_score));

    let Some(level) = result.maturity_level else {
        out.push_str(
            "The assessment is incomplete. Answer all ten questions to receive a \
             maturity classification.\n",
        );
        return out;
    };
    let insight = insight_for(level);

    out.push_str(insight.description);
    out.push_str("\n\nKEY STRENGTHS\n");
    for strength in insight.key_strengths {
        out.push_str(&format!("  - {}\n", strength));
    }

    out.push_str("\nPRIORITY ACTIONS\n");
    for (index, action) in insight.priority_actions.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index + 1, action));
    }

    out.push_str("\nCATEGORY BREAKDOWN\n");
    for category in Category::ALL {
        let max = category_max(catalog, category);
        let score = result.category_scores.get(category);
        let percentage = if max == 0 { 0 } else { (score as u16 * 100 / max as u16) as u8 };
        out.push_str(&format!(
            "  {:<20} {:>2} / {}\n    {}\n",
            category.label(),
            score,
            max,
            category_commentary(category, percentage)
        ));
    }

    out.push_str("\nRECOMMENDED RESOURCES\n");
    for resource in insight.resources {
        out.push_str(&format!(
            "  - {} ({}): {}\n",
            resource.title,
            resource.kind.label(),
            resource.description
        ));
    }

    out
}
