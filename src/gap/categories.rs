use crate::models::{CategoryGapAnalysis, Priority};

/// True when the list carries the technology, versioned or bare.
fn has_tech(current: &[String], name: &str) -> bool {
    current
        .iter()
        .any(|tag| tag == name || tag.starts_with(&format!("{}-", name)))
}

fn has_any(current: &[String], names: &[&str]) -> bool {
    names.iter().any(|name| has_tech(current, name))
}

/// Default priority rule: more than two gaps is high, any gap is medium.
fn general_priority(gap_count: usize) -> Priority {
    if gap_count > 2 {
        Priority::High
    } else if gap_count > 0 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Lower-stakes categories top out at medium and need more than one gap to
/// get there.
fn capped_priority(gap_count: usize) -> Priority {
    if gap_count > 1 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Maps each gap to its recommendation by substring lookup on the gap text.
fn recommend(gaps: &[String], table: &[(&str, &str)]) -> Vec<String> {
    gaps.iter()
        .filter_map(|gap| {
            table
                .iter()
                .find(|(needle, _)| gap.contains(needle))
                .map(|(_, recommendation)| (*recommendation).to_string())
        })
        .collect()
}

fn build(current: &[String], gaps: Vec<String>, table: &[(&str, &str)], priority: Priority) -> CategoryGapAnalysis {
    CategoryGapAnalysis {
        current_technologies: current.to_vec(),
        recommendations: recommend(&gaps, table),
        identified_gaps: gaps,
        priority,
    }
}

pub fn analyze_frontend_gaps(current: &[String]) -> CategoryGapAnalysis {
    const RECOMMENDATIONS: &[(&str, &str)] = &[
        ("frontend framework", "Adopt React or Next.js for component-based UI development"),
        ("TypeScript", "Introduce TypeScript for compile-time type safety"),
        ("CSS framework", "Add Tailwind CSS for consistent, utility-first styling"),
        ("state management", "Add Zustand or Redux Toolkit for predictable client state"),
    ];

    let mut gaps = Vec::new();
    if !has_any(current, &["Next.js", "React", "Vue.js", "Angular", "Svelte"]) {
        gaps.push("No modern frontend framework detected".to_string());
    }
    if !has_tech(current, "TypeScript") {
        gaps.push("No TypeScript usage detected".to_string());
    }
    if !has_any(current, &["Tailwind CSS", "Bootstrap"]) {
        gaps.push("No CSS framework detected".to_string());
    }
    if !has_any(current, &["Redux", "Zustand", "MobX"]) {
        gaps.push("No state management library detected".to_string());
    }

    let priority = general_priority(gaps.len());
    build(current, gaps, RECOMMENDATIONS, priority)
}

pub fn analyze_backend_gaps(current: &[String]) -> CategoryGapAnalysis {
    const RECOMMENDATIONS: &[(&str, &str)] = &[
        ("backend framework", "Adopt a structured backend framework such as Express or NestJS"),
        ("authentication", "Add a managed authentication layer such as Supabase Auth or NextAuth"),
        ("background job", "Introduce a job queue such as BullMQ for work that outlives a request"),
    ];

    let mut gaps = Vec::new();
    if !has_any(
        current,
        &[
            "Express",
            "Fastify",
            "NestJS",
            "Supabase",
            "Django",
            "Flask",
            "FastAPI",
            "Ruby on Rails",
            "Axum",
            "Actix Web",
            "Gin",
        ],
    ) {
        gaps.push("No backend framework detected".to_string());
    }
    if !has_any(current, &["NextAuth", "Supabase", "Firebase Admin"]) {
        gaps.push("No authentication layer detected".to_string());
    }
    if !has_tech(current, "BullMQ") {
        gaps.push("No background job processing detected".to_string());
    }

    let priority = general_priority(gaps.len());
    build(current, gaps, RECOMMENDATIONS, priority)
}

pub fn analyze_database_gaps(current: &[String]) -> CategoryGapAnalysis {
    const RECOMMENDATIONS: &[(&str, &str)] = &[
        ("database technology", "Adopt PostgreSQL via a managed provider such as Supabase"),
        ("ORM", "Introduce Prisma or Drizzle for type-safe database access"),
        ("caching", "Add Redis for hot-path caching and session storage"),
        ("backup", "Define automated backups and a tested recovery procedure"),
    ];

    let mut gaps = Vec::new();
    if !has_any(current, &["PostgreSQL", "MySQL", "MongoDB", "SQLite", "Supabase"]) {
        gaps.push("No database technology detected".to_string());
    }
    if !has_any(current, &["Prisma", "Drizzle", "Mongoose", "Sequelize", "TypeORM"]) {
        gaps.push("No ORM or query builder detected".to_string());
    }
    if !has_tech(current, "Redis") {
        gaps.push("No caching layer detected".to_string());
    }
    // Always flagged, whatever the current stack looks like.
    gaps.push("No explicit backup and recovery strategy".to_string());

    let priority = general_priority(gaps.len());
    build(current, gaps, RECOMMENDATIONS, priority)
}

pub fn analyze_infrastructure_gaps(current: &[String]) -> CategoryGapAnalysis {
    const RECOMMENDATIONS: &[(&str, &str)] = &[
        ("containerization", "Containerize the application with Docker for reproducible environments"),
        ("CI/CD", "Add a GitHub Actions workflow for automated build and test"),
        ("monitoring", "Add Sentry for error monitoring and alerting"),
    ];

    let mut gaps = Vec::new();
    if !has_tech(current, "Docker") {
        gaps.push("No containerization detected".to_string());
    }
    if !has_tech(current, "GitHub Actions") {
        gaps.push("No CI/CD pipeline detected".to_string());
    }
    if !has_tech(current, "Sentry") {
        gaps.push("No monitoring tool detected".to_string());
    }

    let priority = general_priority(gaps.len());
    build(current, gaps, RECOMMENDATIONS, priority)
}

pub fn analyze_platform_gaps(current: &[String]) -> CategoryGapAnalysis {
    const RECOMMENDATIONS: &[(&str, &str)] = &[
        ("hosting platform", "Deploy on Vercel or Netlify for managed builds and preview deployments"),
        ("edge or CDN", "Serve static assets through a CDN such as Cloudflare"),
    ];

    let mut gaps = Vec::new();
    if !has_any(current, &["Vercel", "Netlify", "Firebase", "Cloudflare Workers"]) {
        gaps.push("No managed hosting platform detected".to_string());
    }
    if !has_any(current, &["Vercel", "Cloudflare Workers"]) {
        gaps.push("No edge or CDN layer detected".to_string());
    }

    let priority = capped_priority(gaps.len());
    build(current, gaps, RECOMMENDATIONS, priority)
}

/// AI-stack gaps only matter for AI-oriented projects, so the priority stays
/// low unless the repository description says otherwise.
pub fn analyze_ai_gaps(current: &[String], description: &str) -> CategoryGapAnalysis {
    const RECOMMENDATIONS: &[(&str, &str)] = &[
        ("model provider", "Integrate an LLM provider SDK such as OpenAI or Anthropic"),
        ("orchestration", "Adopt LangChain to structure prompt and retrieval pipelines"),
        ("vector database", "Add Pinecone or pgvector for semantic retrieval"),
    ];

    let mut gaps = Vec::new();
    if !has_any(current, &["OpenAI", "Anthropic", "Hugging Face", "Replicate"]) {
        gaps.push("No AI model provider integration detected".to_string());
    }
    if !has_tech(current, "LangChain") {
        gaps.push("No AI orchestration framework detected".to_string());
    }
    if !has_tech(current, "Pinecone") {
        gaps.push("No vector database for retrieval detected".to_string());
    }

    let lowered = description.to_lowercase();
    let ai_oriented = lowered.contains("ai") || lowered.contains("strategy");
    let priority = if ai_oriented {
        general_priority(gaps.len())
    } else {
        Priority::Low
    };

    build(current, gaps, RECOMMENDATIONS, priority)
}

pub fn analyze_development_gaps(current: &[String]) -> CategoryGapAnalysis {
    const RECOMMENDATIONS: &[(&str, &str)] = &[
        ("linting", "Add ESLint with a shared ruleset enforced in CI"),
        ("formatting", "Add Prettier so formatting stops appearing in diffs"),
        ("testing framework", "Add Vitest or Jest and run the suite on every push"),
    ];

    let mut gaps = Vec::new();
    if !has_tech(current, "ESLint") {
        gaps.push("No linting configuration detected".to_string());
    }
    if !has_tech(current, "Prettier") {
        gaps.push("No code formatting tool detected".to_string());
    }
    if !has_any(current, &["Jest", "Vitest", "Cypress", "Playwright"]) {
        gaps.push("No testing framework detected".to_string());
    }

    let priority = general_priority(gaps.len());
    build(current, gaps, RECOMMENDATIONS, priority)
}

pub fn analyze_integration_gaps(current: &[String]) -> CategoryGapAnalysis {
    const RECOMMENDATIONS: &[(&str, &str)] = &[
        ("payment", "Integrate Stripe when the product needs billing"),
        ("email", "Add a transactional email service such as Resend or SendGrid"),
    ];

    let mut gaps = Vec::new();
    if !has_tech(current, "Stripe") {
        gaps.push("No payment processing integration detected".to_string());
    }
    if !has_any(current, &["SendGrid", "Resend", "Twilio"]) {
        gaps.push("No transactional email service detected".to_string());
    }

    let priority = capped_priority(gaps.len());
    build(current, gaps, RECOMMENDATIONS, priority)
}
