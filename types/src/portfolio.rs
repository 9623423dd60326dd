//! Static portfolio content: profile, skills, and project cards.

use crate::ProjectId;

/// Fallback shown by the code viewer for projects without a snippet.
pub const UNAVAILABLE_SOURCE: &str = "// Code not available for this component";

/// Accent color tag of a project card. Rendering maps it to a palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Yellow,
    Blue,
    Teal,
    Purple,
    Pink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Abigail Concepcion".to_string(),
            title: "Full Stack Software Developer".to_string(),
            summary: "Results-driven ICT graduate and Junior Full Stack Developer specializing \
                      in web and mobile solutions."
                .to_string(),
            email: "concepcionabigail03@gmail.com".to_string(),
            github: "github.com/AbigailConcepcion".to_string(),
            linkedin: "www.linkedin.com/in/abi-concepcion".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

/// A card in the project showcase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub accent: Accent,
    pub pinned: bool,
    /// Projects with a link open externally instead of as an embedded demo.
    pub external_link: Option<&'static str>,
}

impl Project {
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.external_link.is_some()
    }
}

/// Everything rendered on the portfolio page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::builtin(Profile::default())
    }
}

impl Portfolio {
    /// The built-in skills and projects around the given profile.
    #[must_use]
    pub fn builtin(profile: Profile) -> Self {
        Self {
            profile,
            skills: vec![
                SkillGroup {
                    category: "Languages",
                    items: &["Python", "Java", "JavaScript", "HTML", "CSS"],
                },
                SkillGroup {
                    category: "Frameworks",
                    items: &["React", "React Native", "Node.js", "Django", "Tailwind"],
                },
                SkillGroup {
                    category: "Databases",
                    items: &["MySQL", "PostgreSQL", "MongoDB"],
                },
            ],
            projects: vec![
                Project {
                    id: ProjectId::new("loans"),
                    title: "Loans Tracking Mobile",
                    description: "A mobile-first loan management application built for tracking \
                                  borrowers, payment schedules, and statuses.",
                    tags: &["React Native", "Mobile", "Finance"],
                    accent: Accent::Yellow,
                    pinned: true,
                    external_link: Some(
                        "https://preview-0nwsfzfz--loans-tracking-mobile-1.deploypad.app/",
                    ),
                },
                Project {
                    id: ProjectId::new("psymetrics"),
                    title: "Psymetrics Platform",
                    description: "Online testing system with automated reporting and data \
                                  analytics.",
                    tags: &["React", "Node.js", "Analytics"],
                    accent: Accent::Blue,
                    pinned: false,
                    external_link: None,
                },
                Project {
                    id: ProjectId::new("apicella"),
                    title: "Apicella Health",
                    description: "Secure healthcare management app with HIPAA-compliant data \
                                  handling.",
                    tags: &["Healthcare", "Security", "SQL"],
                    accent: Accent::Teal,
                    pinned: false,
                    external_link: None,
                },
                Project {
                    id: ProjectId::new("ecommerce"),
                    title: "E-commerce Store",
                    description: "Online store with cart logic, product grid, and simulated \
                                  checkout.",
                    tags: &["E-commerce", "State Mgmt"],
                    accent: Accent::Purple,
                    pinned: false,
                    external_link: None,
                },
                Project {
                    id: ProjectId::new("ai-calculator"),
                    title: "AI Calculator",
                    description: "Interactive calculator with history and safe evaluation logic.",
                    tags: &["Logic", "UI/UX"],
                    accent: Accent::Pink,
                    pinned: false,
                    external_link: None,
                },
            ],
        }
    }

    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

/// Source excerpt shown by the "View Code" modal.
#[must_use]
pub fn source_snippet(id: ProjectId) -> Option<&'static str> {
    match id.as_str() {
        "loans" => Some(LOANS_SOURCE),
        "psymetrics" => Some(PSYMETRICS_SOURCE),
        "apicella" => Some(APICELLA_SOURCE),
        "ecommerce" => Some(ECOMMERCE_SOURCE),
        "ai-calculator" => Some(CALCULATOR_SOURCE),
        _ => None,
    }
}

const LOANS_SOURCE: &str = r"// Loans Tracking Mobile (React Native / Expo)
export default function LoansScreen() {
  const [loans] = useState([
    { id: '1', name: 'John Doe', amount: 5000, status: 'Active' },
    { id: '2', name: 'Jane Smith', amount: 12500, status: 'Paid' },
  ]);
  return <FlatList data={loans} keyExtractor={i => i.id} renderItem={LoanCard} />;
}";

const PSYMETRICS_SOURCE: &str = r"// Psymetrics assessment flow
match phase {
    Intro => start(),
    Answering { index } => record(weight),
    Analyzing(timer) if timer.fired() => show_result(sum),
    Result => retake_or_exit(),
}";

const APICELLA_SOURCE: &str = r"// Apicella Health records
struct Patient { id: u32, name: String, status: Status }

fn add_patient(records: &mut Vec<Patient>, data: NewPatient) {
    records.push(Patient::from_secure(data));
}";

const ECOMMERCE_SOURCE: &str = r"// DevStore checkout
fn checkout(&mut self) {
    // Payment gateway integration
    self.view = View::Processing(DelayTimer::new(PAYMENT_DELAY));
}";

const CALCULATOR_SOURCE: &str = r"// AI Calculator
fn calculate(&mut self) {
    match evaluate(&self.display) {
        Ok(value) => self.display = format_number(value),
        Err(_) => self.display = String::from(ERROR_DISPLAY),
    }
}";
