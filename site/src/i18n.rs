use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::SkillCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "es")]
    Es,
    #[serde(rename = "en")]
    En,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::PtBr, Locale::Es, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Resolves a display locale, falling back to English for anything
    /// that is not Portuguese or Spanish.
    pub fn for_display(code: &str) -> Self {
        code.parse().unwrap_or(Locale::En)
    }

    /// Picks the supported language with the highest `q` weight out of an
    /// `Accept-Language` header. Ties go to the earlier tag, `q=0` means
    /// "not acceptable" and malformed weights count as 1.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut best: Option<(Self, f32)> = None;

        for part in header.split(',') {
            let mut params = part.split(';');
            let Some(Ok(locale)) = params.next().map(|tag| tag.trim().parse::<Self>()) else {
                continue;
            };
            let quality = params
                .filter_map(|param| param.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);

            if quality <= 0.0 {
                continue;
            }
            if best.is_none_or(|(_, top)| quality > top) {
                best = Some((locale, quality));
            }
        }

        best.map(|(locale, _)| locale)
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Locale::PtBr => &PT_BR,
            Locale::Es => &ES,
            Locale::En => &EN,
        }
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        let primary = tag.split(['-', '_']).next().unwrap_or_default();

        match primary {
            "pt" => Ok(Locale::PtBr),
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            _ => Err(UnsupportedLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug)]
pub struct CommonTexts {
    pub loading: &'static str,
    pub error: &'static str,
}

#[derive(Debug)]
pub struct ContactFieldErrors {
    pub name: &'static str,
    pub email: &'static str,
    pub subject: &'static str,
    pub message: &'static str,
}

#[derive(Debug)]
pub struct ContactTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub errors: ContactFieldErrors,
}

#[derive(Debug)]
pub struct StackTexts {
    pub title: &'static str,
    pub backend: &'static str,
    pub database: &'static str,
    pub frontend: &'static str,
    pub devops: &'static str,
    pub tools: &'static str,
}

impl StackTexts {
    pub fn category(&self, category: SkillCategory) -> &'static str {
        match category {
            SkillCategory::Backend => self.backend,
            SkillCategory::Database => self.database,
            SkillCategory::Frontend => self.frontend,
            SkillCategory::Devops => self.devops,
            SkillCategory::Tools => self.tools,
        }
    }
}

#[derive(Debug)]
pub struct ExperienceTexts {
    pub title: &'static str,
    pub current: &'static str,
}

#[derive(Debug)]
pub struct ProjectTexts {
    pub title: &'static str,
    pub featured: &'static str,
}

/// Static UI strings for one locale.
#[derive(Debug)]
pub struct Translations {
    pub locale: Locale,
    pub common: CommonTexts,
    pub contact: ContactTexts,
    pub stack: StackTexts,
    pub experience: ExperienceTexts,
    pub projects: ProjectTexts,
}

static PT_BR: Translations = Translations {
    locale: Locale::PtBr,
    common: CommonTexts {
        loading: "Carregando...",
        error: "Erro ao carregar dados. Tente novamente mais tarde.",
    },
    contact: ContactTexts {
        title: "Contato",
        subtitle: "Vamos conversar sobre seu próximo projeto",
        send: "Enviar mensagem",
        sending: "Enviando...",
        success: "Mensagem enviada com sucesso! Retornarei em breve.",
        error: "Erro ao enviar mensagem. Tente novamente mais tarde.",
        errors: ContactFieldErrors {
            name: "O nome deve ter entre 3 e 100 caracteres",
            email: "Informe um email válido",
            subject: "O assunto deve ter entre 5 e 200 caracteres",
            message: "A mensagem deve ter entre 10 e 5000 caracteres",
        },
    },
    stack: StackTexts {
        title: "Stack Tecnológico",
        backend: "Backend",
        database: "Banco de Dados",
        frontend: "Frontend",
        devops: "DevOps",
        tools: "Ferramentas",
    },
    experience: ExperienceTexts {
        title: "Experiência",
        current: "Atual",
    },
    projects: ProjectTexts {
        title: "Projetos",
        featured: "Destaque",
    },
};

static ES: Translations = Translations {
    locale: Locale::Es,
    common: CommonTexts {
        loading: "Cargando...",
        error: "Error al cargar los datos. Inténtalo de nuevo más tarde.",
    },
    contact: ContactTexts {
        title: "Contacto",
        subtitle: "Hablemos de tu próximo proyecto",
        send: "Enviar mensaje",
        sending: "Enviando...",
        success: "¡Mensaje enviado con éxito! Responderé pronto.",
        error: "Error al enviar el mensaje. Inténtalo de nuevo más tarde.",
        errors: ContactFieldErrors {
            name: "El nombre debe tener entre 3 y 100 caracteres",
            email: "Introduce un correo electrónico válido",
            subject: "El asunto debe tener entre 5 y 200 caracteres",
            message: "El mensaje debe tener entre 10 y 5000 caracteres",
        },
    },
    stack: StackTexts {
        title: "Stack Tecnológico",
        backend: "Backend",
        database: "Base de Datos",
        frontend: "Frontend",
        devops: "DevOps",
        tools: "Herramientas",
    },
    experience: ExperienceTexts {
        title: "Experiencia",
        current: "Actual",
    },
    projects: ProjectTexts {
        title: "Proyectos",
        featured: "Destacado",
    },
};

static EN: Translations = Translations {
    locale: Locale::En,
    common: CommonTexts {
        loading: "Loading...",
        error: "Failed to load data. Please try again later.",
    },
    contact: ContactTexts {
        title: "Contact",
        subtitle: "Let's talk about your next project",
        send: "Send message",
        sending: "Sending...",
        success: "Message sent successfully! I'll get back to you soon.",
        error: "Failed to send message. Please try again later.",
        errors: ContactFieldErrors {
            name: "Name must be between 3 and 100 characters",
            email: "Please enter a valid email",
            subject: "Subject must be between 5 and 200 characters",
            message: "Message must be between 10 and 5000 characters",
        },
    },
    stack: StackTexts {
        title: "Tech Stack",
        backend: "Backend",
        database: "Database",
        frontend: "Frontend",
        devops: "DevOps",
        tools: "Tools",
    },
    experience: ExperienceTexts {
        title: "Experience",
        current: "Current",
    },
    projects: ProjectTexts {
        title: "Projects",
        featured: "Featured",
    },
};
