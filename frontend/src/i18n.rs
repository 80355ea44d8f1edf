//! Page copy for every supported locale.
//!
//! One page component renders all languages; the text lives here in a static
//! table keyed by [`Locale`]. Details that do not change between languages
//! (phone number, address, photos) live in [`PRACTICE`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Pt,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Pt];

    /// Path segment and `lang` attribute value.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }

    /// The locale offered by the language switch in the nav.
    pub fn other(self) -> Locale {
        match self {
            Locale::En => Locale::Pt,
            Locale::Pt => Locale::En,
        }
    }

    pub fn copy(self) -> &'static SiteCopy {
        match self {
            Locale::En => &EN,
            Locale::Pt => &PT,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLocaleError {
    #[error("empty locale tag")]
    Empty,
    #[error("unsupported locale `{0}`")]
    Unsupported(String),
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    /// Accepts bare language codes and region-qualified tags (`pt-BR`, `en_US`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.is_empty() {
            return Err(ParseLocaleError::Empty);
        }
        let language = tag
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or(tag)
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Ok(Locale::En),
            "pt" => Ok(Locale::Pt),
            _ => Err(ParseLocaleError::Unsupported(tag.to_string())),
        }
    }
}

/// Practice details shared by every locale.
pub struct PracticeInfo {
    pub phone: &'static str,
    pub email: &'static str,
    pub address_lines: [&'static str; 2],
    pub footer_address_lines: [&'static str; 2],
    pub hero_image: &'static str,
    pub portrait_image: &'static str,
    pub therapy_image: &'static str,
    pub clinical_image: &'static str,
}

pub const PRACTICE: PracticeInfo = PracticeInfo {
    phone: "(555) 123-4567",
    email: "dr.hilda@example.com",
    address_lines: ["123 Wellness Street", "Suite 456, City, State 12345"],
    footer_address_lines: ["123 Wellness Street", "Suite 456, City, State"],
    hero_image: "https://images.unsplash.com/photo-1533090161767-e6ffed986c88",
    portrait_image: "https://images.unsplash.com/photo-1712174766230-cb7304feaafe",
    therapy_image: "https://images.pexels.com/photos/5217851/pexels-photo-5217851.jpeg",
    clinical_image: "https://images.pexels.com/photos/4098150/pexels-photo-4098150.jpeg",
};

#[derive(Debug, PartialEq)]
pub struct NavItem {
    /// Section id the link scrolls to. Stable across locales.
    pub anchor: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Highlight {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Accent {
    Blue,
    Teal,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Blue => "accent-blue",
            Accent::Teal => "accent-teal",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ServiceCard {
    pub title: &'static str,
    pub image_alt: &'static str,
    pub description: &'static str,
    pub points: [&'static str; 4],
    pub accent: Accent,
}

#[derive(Debug, PartialEq)]
pub struct CredentialGroup {
    pub title: &'static str,
    pub items: [&'static str; 4],
}

#[derive(Debug, PartialEq)]
pub struct ServiceOption {
    /// Form value. Stable across locales.
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct NavCopy {
    pub items: [NavItem; 4],
    pub menu_label: &'static str,
    pub switch_label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct HeroCopy {
    pub title_lead: &'static str,
    pub title_accent: &'static str,
    pub subtitle: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct AboutCopy {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub portrait_alt: &'static str,
    pub paragraphs: [&'static str; 2],
    pub highlights: [Highlight; 4],
}

#[derive(Debug, PartialEq)]
pub struct ServicesCopy {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub cards: [ServiceCard; 2],
}

#[derive(Debug, PartialEq)]
pub struct CredentialsCopy {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub groups: [CredentialGroup; 3],
}

#[derive(Debug, PartialEq)]
pub struct FormCopy {
    pub heading: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub phone_label: &'static str,
    pub phone_placeholder: &'static str,
    pub service_label: &'static str,
    pub service_placeholder: &'static str,
    pub services: [ServiceOption; 3],
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub submit: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ContactCopy {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub info_heading: &'static str,
    pub phone_label: &'static str,
    pub email_label: &'static str,
    pub office_label: &'static str,
    pub hours_heading: &'static str,
    pub hours: [&'static str; 3],
    pub emergency_note: &'static str,
    pub form: FormCopy,
}

#[derive(Debug, PartialEq)]
pub struct FooterCopy {
    pub blurb: &'static str,
    pub services_heading: &'static str,
    pub services: [&'static str; 4],
    pub links_heading: &'static str,
    pub contact_heading: &'static str,
    pub rights: &'static str,
    pub privacy: &'static str,
    pub terms: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct SiteCopy {
    pub page_title: &'static str,
    /// Practitioner name with the locale's honorific.
    pub brand: &'static str,
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub about: AboutCopy,
    pub services: ServicesCopy,
    pub credentials: CredentialsCopy,
    pub contact: ContactCopy,
    pub footer: FooterCopy,
}

static EN: SiteCopy = SiteCopy {
    page_title: "Dr. Hilda Raichell | Professional Psychology Services",
    brand: "Dr. Hilda Raichell",
    nav: NavCopy {
        items: [
            NavItem { anchor: "about", label: "About" },
            NavItem { anchor: "services", label: "Services" },
            NavItem { anchor: "credentials", label: "Credentials" },
            NavItem { anchor: "contact", label: "Contact" },
        ],
        menu_label: "Toggle navigation menu",
        switch_label: "Português",
    },
    hero: HeroCopy {
        title_lead: "Professional",
        title_accent: "Psychology Services",
        subtitle: "Expert therapy and clinical psychology services with Dr. Hilda Raichell. \
                   Building trust, healing minds, and empowering lives through evidence-based care.",
        primary_cta: "Schedule Consultation",
        secondary_cta: "Learn More",
    },
    about: AboutCopy {
        heading: "About Dr. Hilda Raichell",
        subheading: "Dedicated to providing compassionate, evidence-based mental health care",
        portrait_alt: "Dr. Hilda Raichell",
        paragraphs: [
            "Dr. Hilda Raichell brings over a decade of experience in clinical psychology \
             and therapeutic practice. Her approach combines evidence-based treatments with \
             genuine compassion to create a safe, supportive environment for healing.",
            "Specializing in individual therapy and clinical psychology, Dr. Raichell \
             has helped hundreds of clients navigate life's challenges and achieve \
             meaningful personal growth.",
        ],
        highlights: [
            Highlight { title: "Licensed Clinical Psychologist", desc: "PhD in Clinical Psychology" },
            Highlight { title: "10+ Years Experience", desc: "Treating diverse populations" },
            Highlight { title: "Evidence-Based", desc: "CBT, DBT, and mindfulness approaches" },
            Highlight { title: "Personalized Care", desc: "Tailored treatment plans" },
        ],
    },
    services: ServicesCopy {
        heading: "Professional Services",
        subheading: "Comprehensive mental health care tailored to your unique needs",
        cards: [
            ServiceCard {
                title: "Individual Therapy",
                image_alt: "Therapy session",
                description: "One-on-one therapy sessions in a safe, confidential environment. \
                              We work together to address anxiety, depression, trauma, relationship issues, \
                              and life transitions using evidence-based therapeutic approaches.",
                points: [
                    "Cognitive Behavioral Therapy (CBT)",
                    "Dialectical Behavior Therapy (DBT)",
                    "Mindfulness-Based Interventions",
                    "Trauma-Informed Care",
                ],
                accent: Accent::Blue,
            },
            ServiceCard {
                title: "Clinical Psychology",
                image_alt: "Clinical assessment",
                description: "Comprehensive psychological assessment and treatment for complex mental health conditions. \
                              Professional evaluation, diagnosis, and evidence-based treatment planning \
                              for optimal therapeutic outcomes.",
                points: [
                    "Psychological Assessment & Testing",
                    "Diagnostic Evaluation",
                    "Treatment Planning",
                    "Crisis Intervention",
                ],
                accent: Accent::Teal,
            },
        ],
    },
    credentials: CredentialsCopy {
        heading: "Professional Credentials",
        subheading: "Trusted expertise backed by extensive education and professional experience",
        groups: [
            CredentialGroup {
                title: "Education",
                items: [
                    "PhD in Clinical Psychology",
                    "Licensed Clinical Psychologist",
                    "Board Certified Professional",
                    "Continuing Education Certified",
                ],
            },
            CredentialGroup {
                title: "Specializations",
                items: [
                    "Anxiety & Depression",
                    "Trauma & PTSD",
                    "Relationship Therapy",
                    "Life Transitions",
                ],
            },
            CredentialGroup {
                title: "Professional Memberships",
                items: [
                    "American Psychological Association",
                    "Licensed Professional Counselor",
                    "Clinical Psychology Board",
                    "Ethics Committee Member",
                ],
            },
        ],
    },
    contact: ContactCopy {
        heading: "Ready to Begin Your Journey?",
        subheading: "Take the first step toward healing and personal growth. Schedule your consultation today.",
        info_heading: "Contact Information",
        phone_label: "Phone",
        email_label: "Email",
        office_label: "Office",
        hours_heading: "Office Hours",
        hours: [
            "Monday - Friday: 9:00 AM - 6:00 PM",
            "Saturday: 10:00 AM - 4:00 PM",
            "Sunday: Closed",
        ],
        emergency_note: "Emergency consultations available",
        form: FormCopy {
            heading: "Schedule Consultation",
            name_label: "Full Name",
            name_placeholder: "Enter your full name",
            email_label: "Email Address",
            email_placeholder: "Enter your email",
            phone_label: "Phone Number",
            phone_placeholder: "Enter your phone number",
            service_label: "Preferred Service",
            service_placeholder: "Select a service",
            services: [
                ServiceOption { value: "individual-therapy", label: "Individual Therapy" },
                ServiceOption { value: "clinical-psychology", label: "Clinical Psychology" },
                ServiceOption { value: "assessment", label: "Psychological Assessment" },
            ],
            message_label: "Message",
            message_placeholder: "Tell us about your needs and preferred appointment time",
            submit: "Schedule Consultation",
        },
    },
    footer: FooterCopy {
        blurb: "Professional psychology services with compassion and expertise.",
        services_heading: "Services",
        services: [
            "Individual Therapy",
            "Clinical Psychology",
            "Psychological Assessment",
            "Crisis Intervention",
        ],
        links_heading: "Quick Links",
        contact_heading: "Contact",
        rights: "All rights reserved.",
        privacy: "Privacy Policy",
        terms: "Terms of Service",
    },
};

static PT: SiteCopy = SiteCopy {
    page_title: "Dra. Hilda Raichell | Serviços Profissionais de Psicologia",
    brand: "Dra. Hilda Raichell",
    nav: NavCopy {
        items: [
            NavItem { anchor: "about", label: "Sobre" },
            NavItem { anchor: "services", label: "Serviços" },
            NavItem { anchor: "credentials", label: "Credenciais" },
            NavItem { anchor: "contact", label: "Contato" },
        ],
        menu_label: "Abrir ou fechar o menu de navegação",
        switch_label: "English",
    },
    hero: HeroCopy {
        title_lead: "Serviços Profissionais",
        title_accent: "de Psicologia",
        subtitle: "Terapia especializada e psicologia clínica com a Dra. Hilda Raichell. \
                   Construindo confiança, curando mentes e fortalecendo vidas com um cuidado baseado em evidências.",
        primary_cta: "Agendar Consulta",
        secondary_cta: "Saiba Mais",
    },
    about: AboutCopy {
        heading: "Sobre a Dra. Hilda Raichell",
        subheading: "Dedicada a oferecer um cuidado em saúde mental acolhedor e baseado em evidências",
        portrait_alt: "Dra. Hilda Raichell",
        paragraphs: [
            "A Dra. Hilda Raichell tem mais de uma década de experiência em psicologia clínica \
             e prática terapêutica. Sua abordagem une tratamentos baseados em evidências a uma \
             compaixão genuína, criando um ambiente seguro e acolhedor para a cura.",
            "Especializada em terapia individual e psicologia clínica, a Dra. Raichell \
             já ajudou centenas de pacientes a enfrentar os desafios da vida e alcançar \
             um crescimento pessoal significativo.",
        ],
        highlights: [
            Highlight { title: "Psicóloga Clínica Licenciada", desc: "Doutorado em Psicologia Clínica" },
            Highlight { title: "Mais de 10 Anos de Experiência", desc: "Atendendo públicos diversos" },
            Highlight { title: "Baseada em Evidências", desc: "Abordagens de TCC, TCD e mindfulness" },
            Highlight { title: "Cuidado Personalizado", desc: "Planos de tratamento sob medida" },
        ],
    },
    services: ServicesCopy {
        heading: "Serviços Profissionais",
        subheading: "Cuidado completo em saúde mental, adaptado às suas necessidades",
        cards: [
            ServiceCard {
                title: "Terapia Individual",
                image_alt: "Sessão de terapia",
                description: "Sessões individuais em um ambiente seguro e confidencial. \
                              Trabalhamos juntos para lidar com ansiedade, depressão, traumas, questões de relacionamento \
                              e transições de vida, com abordagens terapêuticas baseadas em evidências.",
                points: [
                    "Terapia Cognitivo-Comportamental (TCC)",
                    "Terapia Comportamental Dialética (TCD)",
                    "Intervenções Baseadas em Mindfulness",
                    "Cuidado Informado sobre Traumas",
                ],
                accent: Accent::Blue,
            },
            ServiceCard {
                title: "Psicologia Clínica",
                image_alt: "Avaliação clínica",
                description: "Avaliação psicológica completa e tratamento para condições de saúde mental complexas. \
                              Avaliação profissional, diagnóstico e planejamento de tratamento baseado em evidências \
                              para os melhores resultados terapêuticos.",
                points: [
                    "Avaliação e Testagem Psicológica",
                    "Avaliação Diagnóstica",
                    "Planejamento de Tratamento",
                    "Intervenção em Crises",
                ],
                accent: Accent::Teal,
            },
        ],
    },
    credentials: CredentialsCopy {
        heading: "Credenciais Profissionais",
        subheading: "Experiência confiável, sustentada por sólida formação e prática profissional",
        groups: [
            CredentialGroup {
                title: "Formação",
                items: [
                    "Doutorado em Psicologia Clínica",
                    "Psicóloga Clínica Licenciada",
                    "Profissional Certificada pelo Conselho",
                    "Certificação em Educação Continuada",
                ],
            },
            CredentialGroup {
                title: "Especializações",
                items: [
                    "Ansiedade e Depressão",
                    "Trauma e TEPT",
                    "Terapia de Relacionamento",
                    "Transições de Vida",
                ],
            },
            CredentialGroup {
                title: "Associações Profissionais",
                items: [
                    "Associação Americana de Psicologia",
                    "Conselheira Profissional Licenciada",
                    "Conselho de Psicologia Clínica",
                    "Membro do Comitê de Ética",
                ],
            },
        ],
    },
    contact: ContactCopy {
        heading: "Pronto para Começar sua Jornada?",
        subheading: "Dê o primeiro passo rumo à cura e ao crescimento pessoal. Agende sua consulta hoje.",
        info_heading: "Informações de Contato",
        phone_label: "Telefone",
        email_label: "E-mail",
        office_label: "Consultório",
        hours_heading: "Horário de Atendimento",
        hours: [
            "Segunda a Sexta: 9h às 18h",
            "Sábado: 10h às 16h",
            "Domingo: Fechado",
        ],
        emergency_note: "Consultas de emergência disponíveis",
        form: FormCopy {
            heading: "Agendar Consulta",
            name_label: "Nome Completo",
            name_placeholder: "Digite seu nome completo",
            email_label: "Endereço de E-mail",
            email_placeholder: "Digite seu e-mail",
            phone_label: "Telefone",
            phone_placeholder: "Digite seu telefone",
            service_label: "Serviço de Preferência",
            service_placeholder: "Selecione um serviço",
            services: [
                ServiceOption { value: "individual-therapy", label: "Terapia Individual" },
                ServiceOption { value: "clinical-psychology", label: "Psicologia Clínica" },
                ServiceOption { value: "assessment", label: "Avaliação Psicológica" },
            ],
            message_label: "Mensagem",
            message_placeholder: "Conte-nos sobre suas necessidades e o melhor horário para a consulta",
            submit: "Agendar Consulta",
        },
    },
    footer: FooterCopy {
        blurb: "Serviços profissionais de psicologia com compaixão e competência.",
        services_heading: "Serviços",
        services: [
            "Terapia Individual",
            "Psicologia Clínica",
            "Avaliação Psicológica",
            "Intervenção em Crises",
        ],
        links_heading: "Links Rápidos",
        contact_heading: "Contato",
        rights: "Todos os direitos reservados.",
        privacy: "Política de Privacidade",
        terms: "Termos de Serviço",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_and_regional_tags() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("PT".parse::<Locale>(), Ok(Locale::Pt));
        assert_eq!("pt-BR".parse::<Locale>(), Ok(Locale::Pt));
        assert_eq!("en_US".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" pt ".parse::<Locale>(), Ok(Locale::Pt));
    }

    #[test]
    fn rejects_unknown_tags() {
        assert_eq!("".parse::<Locale>(), Err(ParseLocaleError::Empty));
        assert_eq!(
            "fi".parse::<Locale>(),
            Err(ParseLocaleError::Unsupported("fi".to_string()))
        );
    }

    #[test]
    fn tag_round_trips_through_display() {
        for locale in Locale::ALL {
            assert_eq!(locale.to_string().parse::<Locale>(), Ok(locale));
        }
    }

    #[test]
    fn switch_target_is_the_other_locale() {
        assert_eq!(Locale::En.other(), Locale::Pt);
        assert_eq!(Locale::Pt.other(), Locale::En);
    }

    #[test]
    fn anchors_and_form_values_match_across_locales() {
        let en = Locale::En.copy();
        let pt = Locale::Pt.copy();
        for (a, b) in en.nav.items.iter().zip(pt.nav.items.iter()) {
            assert_eq!(a.anchor, b.anchor);
        }
        for (a, b) in en.contact.form.services.iter().zip(pt.contact.form.services.iter()) {
            assert_eq!(a.value, b.value);
        }
        assert_eq!(
            en.nav.items.iter().map(|i| i.anchor).collect::<Vec<_>>(),
            vec!["about", "services", "credentials", "contact"]
        );
    }

    #[test]
    fn every_locale_has_text_everywhere() {
        for locale in Locale::ALL {
            let copy = locale.copy();
            let mut texts: Vec<&str> = vec![
                copy.page_title,
                copy.brand,
                copy.hero.title_lead,
                copy.hero.title_accent,
                copy.hero.subtitle,
                copy.about.heading,
                copy.services.heading,
                copy.credentials.heading,
                copy.contact.heading,
                copy.contact.form.submit,
                copy.footer.blurb,
            ];
            texts.extend(copy.nav.items.iter().map(|i| i.label));
            texts.extend(copy.about.paragraphs.iter().copied());
            texts.extend(copy.services.cards.iter().flat_map(|c| c.points.iter().copied()));
            texts.extend(copy.credentials.groups.iter().flat_map(|g| g.items.iter().copied()));
            texts.extend(copy.contact.hours.iter().copied());
            for text in texts {
                assert!(!text.trim().is_empty(), "blank copy in {locale}");
            }
        }
    }

    #[test]
    fn locales_are_actually_translated() {
        assert_ne!(Locale::En.copy().hero.subtitle, Locale::Pt.copy().hero.subtitle);
        assert_ne!(Locale::En.copy().nav.switch_label, Locale::Pt.copy().nav.switch_label);
    }
}
