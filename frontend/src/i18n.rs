//! Typed translations for the two published languages.
//!
//! Every key has to be answered by both `es` and `pt`; the matches below are
//! exhaustive, so a missing string is a compile error rather than a key
//! leaking into the page.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    Es,
    Pt,
}

impl Default for Locale {
    fn default() -> Self {
        crate::config::DEFAULT_LOCALE
    }
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::Pt];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::Pt => "pt",
        }
    }

    pub fn from_code(code: &str) -> Option<Locale> {
        Locale::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Locale carried by the first path segment (`/pt/...`), if any.
    pub fn from_path(path: &str) -> Option<Locale> {
        let segment = path.trim_start_matches('/').split('/').next()?;
        Locale::from_code(segment)
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Locale::Es => t(self, Key::LanguageEs),
            Locale::Pt => t(self, Key::LanguagePt),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Language of the current page: the URL prefix wins, then the `lang` the
/// server stamped on the document, then the build default.
pub fn page_locale(path: &str, document_lang: Option<&str>) -> Locale {
    Locale::from_path(path)
        .or_else(|| document_lang.and_then(Locale::from_code))
        .unwrap_or_default()
}

/// Same page, other language: `/es/faq` -> `/pt/faq`.
pub fn switch_locale_path(path: &str, locale: Locale) -> String {
    let trimmed = path.trim_start_matches('/');
    let rest = match Locale::from_path(path) {
        Some(current) => trimmed[current.code().len()..].trim_start_matches('/'),
        None => trimmed,
    };
    if rest.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}/{}", locale.code(), rest)
    }
}

/// Configuration shared by every component below the root.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SiteSettings {
    pub locale: Locale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    NavServices,
    NavProcess,
    NavFaq,
    NavContact,
    NavConsultation,
    LanguageLabel,
    LanguageEs,
    LanguagePt,
    HeroTitle,
    HeroHighlight,
    HeroSubtitle,
    HeroCtaPrimary,
    HeroCtaSecondary,
    ServicesTitle,
    ServiceDesignTitle,
    ServiceDesignBody,
    ServiceCopyTitle,
    ServiceCopyBody,
    ServiceOptimizeTitle,
    ServiceOptimizeBody,
    ProcessTitle,
    ProcessDiscover,
    ProcessDesign,
    ProcessBuild,
    ProcessLaunch,
    FaqTitle,
    FaqSubtitle,
    FaqTimelineQuestion,
    FaqTimelineAnswer,
    FaqOwnershipQuestion,
    FaqOwnershipAnswer,
    FaqChangesQuestion,
    FaqChangesAnswer,
    ContactTitle,
    ContactSubtitle,
    StepNameTitle,
    StepNamePlaceholder,
    StepEmailTitle,
    StepEmailPlaceholder,
    StepCompanyTitle,
    StepCompanyPlaceholder,
    StepWhatsappTitle,
    StepWhatsappPlaceholder,
    StepPlanTitle,
    StepMessageTitle,
    StepMessagePlaceholder,
    ErrorName,
    ErrorEmail,
    ErrorCompany,
    ErrorPlan,
    ButtonPrev,
    ButtonNext,
    ButtonSubmit,
    ButtonSubmitting,
    ButtonReset,
    SuccessTitle,
    SuccessMessage,
    SubmitFailed,
    PlanStartupName,
    PlanStartupDescription,
    PlanGrowName,
    PlanGrowDescription,
    PlanScaleUpName,
    PlanScaleUpDescription,
    PlanEnterpriseName,
    PlanEnterpriseDescription,
    FeatureCustomDesign,
    FeatureResponsive,
    FeatureBasicSeo,
    FeatureEverythingBefore,
    FeatureAnimations,
    FeatureForms,
    FeatureCrm,
    FeatureAnalytics,
    FeatureUnlimitedRevisions,
    PricingTitle,
    PricingSubtitle,
    PricingPopular,
    PricingSelect,
    CookieText,
    CookiePolicy,
    CookieAccept,
    CookieReject,
    FooterTagline,
    FooterRights,
    WhatsappAccessibility,
}

pub fn t(locale: Locale, key: Key) -> &'static str {
    match locale {
        Locale::Es => es(key),
        Locale::Pt => pt(key),
    }
}

fn es(key: Key) -> &'static str {
    match key {
        Key::NavServices => "Servicios",
        Key::NavProcess => "Proceso",
        Key::NavFaq => "Preguntas",
        Key::NavContact => "Contacto",
        Key::NavConsultation => "Consulta Gratuita",
        Key::LanguageLabel => "Idioma",
        Key::LanguageEs => "Español",
        Key::LanguagePt => "Português",
        Key::HeroTitle => "Convertimos visitantes en",
        Key::HeroHighlight => "clientes",
        Key::HeroSubtitle => "Diseñamos landing pages que convierten hasta un 93% más que el promedio de la industria. Estrategia, diseño y psicología de conversión.",
        Key::HeroCtaPrimary => "Consulta Estratégica Gratuita",
        Key::HeroCtaSecondary => "Ver Casos de Éxito",
        Key::ServicesTitle => "Servicios",
        Key::ServiceDesignTitle => "Diseño estratégico",
        Key::ServiceDesignBody => "Cada sección tiene un objetivo: guiar al visitante hasta la conversión.",
        Key::ServiceCopyTitle => "Copywriting persuasivo",
        Key::ServiceCopyBody => "Mensajes claros que responden a las objeciones de tus clientes.",
        Key::ServiceOptimizeTitle => "Optimización continua",
        Key::ServiceOptimizeBody => "Medimos, probamos y mejoramos después del lanzamiento.",
        Key::ProcessTitle => "Nuestro proceso",
        Key::ProcessDiscover => "Descubrimiento",
        Key::ProcessDesign => "Diseño",
        Key::ProcessBuild => "Desarrollo",
        Key::ProcessLaunch => "Lanzamiento",
        Key::FaqTitle => "Preguntas frecuentes",
        Key::FaqSubtitle => "Respuestas a las dudas más comunes sobre nuestros servicios de landing pages.",
        Key::FaqTimelineQuestion => "¿Cuánto tarda una landing page?",
        Key::FaqTimelineAnswer => "Entre una y tres semanas según el plan y la cantidad de revisiones.",
        Key::FaqOwnershipQuestion => "¿La página es mía?",
        Key::FaqOwnershipAnswer => "Sí. Te entregamos el diseño y el sitio publicado en tu propio dominio.",
        Key::FaqChangesQuestion => "¿Puedo pedir cambios?",
        Key::FaqChangesAnswer => "Cada plan incluye rondas de revisión; el plan Enterprise no tiene límite.",
        Key::ContactTitle => "Hablemos de tu proyecto",
        Key::ContactSubtitle => "Responde unas preguntas rápidas y te contactaremos en menos de 24 horas.",
        Key::StepNameTitle => "¿Cómo te llamas?",
        Key::StepNamePlaceholder => "Escribe tu nombre completo",
        Key::StepEmailTitle => "¿Cuál es tu correo electrónico?",
        Key::StepEmailPlaceholder => "tu@email.com",
        Key::StepCompanyTitle => "¿Para qué empresa trabajas?",
        Key::StepCompanyPlaceholder => "Nombre de tu empresa",
        Key::StepWhatsappTitle => "WhatsApp (opcional)",
        Key::StepWhatsappPlaceholder => "+34 600 000 000",
        Key::StepPlanTitle => "¿Qué plan te interesa más?",
        Key::StepMessageTitle => "¿Algo más que quieras contarnos?",
        Key::StepMessagePlaceholder => "Cuéntanos más detalles sobre tu proyecto, objetivos, timeline, etc.",
        Key::ErrorName => "El nombre debe tener al menos 2 caracteres",
        Key::ErrorEmail => "Por favor, introduce un correo válido",
        Key::ErrorCompany => "El nombre de la empresa es requerido",
        Key::ErrorPlan => "Por favor selecciona un plan",
        Key::ButtonPrev => "Anterior",
        Key::ButtonNext => "Siguiente",
        Key::ButtonSubmit => "Enviar",
        Key::ButtonSubmitting => "Enviando...",
        Key::ButtonReset => "Enviar otra solicitud",
        Key::SuccessTitle => "¡Solicitud enviada!",
        Key::SuccessMessage => "Gracias por contactarnos. Te responderemos muy pronto.",
        Key::SubmitFailed => "No pudimos enviar tu solicitud. Inténtalo de nuevo.",
        Key::PlanStartupName => "Startup",
        Key::PlanStartupDescription => "Para profesionales independientes",
        Key::PlanGrowName => "Grow",
        Key::PlanGrowDescription => "Para pequeñas empresas en crecimiento",
        Key::PlanScaleUpName => "Scale-Up",
        Key::PlanScaleUpDescription => "Para medianas empresas",
        Key::PlanEnterpriseName => "Enterprise",
        Key::PlanEnterpriseDescription => "Para equipos con varias campañas activas",
        Key::FeatureCustomDesign => "Diseño personalizado",
        Key::FeatureResponsive => "Responsive",
        Key::FeatureBasicSeo => "SEO básico",
        Key::FeatureEverythingBefore => "Todo lo anterior",
        Key::FeatureAnimations => "Animaciones",
        Key::FeatureForms => "Formularios",
        Key::FeatureCrm => "Integración con CRM",
        Key::FeatureAnalytics => "Analytics",
        Key::FeatureUnlimitedRevisions => "Revisiones ilimitadas",
        Key::PricingTitle => "Planes que se adaptan a tu negocio",
        Key::PricingSubtitle => "Soluciones a medida para maximizar tus conversiones, sin importar el tamaño de tu empresa.",
        Key::PricingPopular => "Más popular",
        Key::PricingSelect => "Seleccionar plan",
        Key::CookieText => "Utilizamos cookies para mejorar tu experiencia en nuestro sitio web. Al continuar navegando, aceptas nuestra",
        Key::CookiePolicy => "política de cookies",
        Key::CookieAccept => "Aceptar",
        Key::CookieReject => "Rechazar",
        Key::FooterTagline => "Landing pages que convierten.",
        Key::FooterRights => "Todos los derechos reservados.",
        Key::WhatsappAccessibility => "Escríbenos por WhatsApp",
    }
}

fn pt(key: Key) -> &'static str {
    match key {
        Key::NavServices => "Serviços",
        Key::NavProcess => "Processo",
        Key::NavFaq => "Perguntas",
        Key::NavContact => "Contato",
        Key::NavConsultation => "Consulta Gratuita",
        Key::LanguageLabel => "Idioma",
        Key::LanguageEs => "Español",
        Key::LanguagePt => "Português",
        Key::HeroTitle => "Convertemos visitantes em",
        Key::HeroHighlight => "clientes",
        Key::HeroSubtitle => "Projetamos landing pages que convertem até 93% mais do que a média do setor. Estratégia, design e psicologia de conversão.",
        Key::HeroCtaPrimary => "Consulta Estratégica Gratuita",
        Key::HeroCtaSecondary => "Ver Casos de Sucesso",
        Key::ServicesTitle => "Serviços",
        Key::ServiceDesignTitle => "Design estratégico",
        Key::ServiceDesignBody => "Cada seção tem um objetivo: levar o visitante até a conversão.",
        Key::ServiceCopyTitle => "Copywriting persuasivo",
        Key::ServiceCopyBody => "Mensagens claras que respondem às objeções dos seus clientes.",
        Key::ServiceOptimizeTitle => "Otimização contínua",
        Key::ServiceOptimizeBody => "Medimos, testamos e melhoramos depois do lançamento.",
        Key::ProcessTitle => "Nosso processo",
        Key::ProcessDiscover => "Descoberta",
        Key::ProcessDesign => "Design",
        Key::ProcessBuild => "Desenvolvimento",
        Key::ProcessLaunch => "Lançamento",
        Key::FaqTitle => "Perguntas frequentes",
        Key::FaqSubtitle => "Respostas às dúvidas mais comuns sobre nossos serviços de landing pages.",
        Key::FaqTimelineQuestion => "Quanto tempo leva uma landing page?",
        Key::FaqTimelineAnswer => "Entre uma e três semanas, dependendo do plano e da quantidade de revisões.",
        Key::FaqOwnershipQuestion => "A página é minha?",
        Key::FaqOwnershipAnswer => "Sim. Entregamos o design e o site publicado no seu próprio domínio.",
        Key::FaqChangesQuestion => "Posso pedir alterações?",
        Key::FaqChangesAnswer => "Cada plano inclui rodadas de revisão; o plano Enterprise não tem limite.",
        Key::ContactTitle => "Vamos falar do seu projeto",
        Key::ContactSubtitle => "Responda algumas perguntas rápidas e entraremos em contato em menos de 24 horas.",
        Key::StepNameTitle => "Qual é o seu nome?",
        Key::StepNamePlaceholder => "Escreva seu nome completo",
        Key::StepEmailTitle => "Qual é o seu e-mail?",
        Key::StepEmailPlaceholder => "voce@email.com",
        Key::StepCompanyTitle => "Para qual empresa você trabalha?",
        Key::StepCompanyPlaceholder => "Nome da sua empresa",
        Key::StepWhatsappTitle => "WhatsApp (opcional)",
        Key::StepWhatsappPlaceholder => "+55 11 00000 0000",
        Key::StepPlanTitle => "Qual plano mais te interessa?",
        Key::StepMessageTitle => "Algo mais que queira nos contar?",
        Key::StepMessagePlaceholder => "Conte mais detalhes sobre seu projeto, objetivos, prazos, etc.",
        Key::ErrorName => "O nome deve ter pelo menos 2 caracteres",
        Key::ErrorEmail => "Por favor, informe um e-mail válido",
        Key::ErrorCompany => "O nome da empresa é obrigatório",
        Key::ErrorPlan => "Por favor, selecione um plano",
        Key::ButtonPrev => "Anterior",
        Key::ButtonNext => "Próximo",
        Key::ButtonSubmit => "Enviar",
        Key::ButtonSubmitting => "Enviando...",
        Key::ButtonReset => "Enviar outra solicitação",
        Key::SuccessTitle => "Solicitação enviada!",
        Key::SuccessMessage => "Obrigado pelo contato. Responderemos em breve.",
        Key::SubmitFailed => "Não conseguimos enviar sua solicitação. Tente novamente.",
        Key::PlanStartupName => "Startup",
        Key::PlanStartupDescription => "Para profissionais independentes",
        Key::PlanGrowName => "Grow",
        Key::PlanGrowDescription => "Para pequenas empresas em crescimento",
        Key::PlanScaleUpName => "Scale-Up",
        Key::PlanScaleUpDescription => "Para médias empresas",
        Key::PlanEnterpriseName => "Enterprise",
        Key::PlanEnterpriseDescription => "Para equipes com várias campanhas ativas",
        Key::FeatureCustomDesign => "Design personalizado",
        Key::FeatureResponsive => "Responsivo",
        Key::FeatureBasicSeo => "SEO básico",
        Key::FeatureEverythingBefore => "Tudo do plano anterior",
        Key::FeatureAnimations => "Animações",
        Key::FeatureForms => "Formulários",
        Key::FeatureCrm => "Integração com CRM",
        Key::FeatureAnalytics => "Analytics",
        Key::FeatureUnlimitedRevisions => "Revisões ilimitadas",
        Key::PricingTitle => "Planos que se adaptam ao seu negócio",
        Key::PricingSubtitle => "Soluções sob medida para maximizar suas conversões, não importa o tamanho da sua empresa.",
        Key::PricingPopular => "Mais popular",
        Key::PricingSelect => "Selecionar plano",
        Key::CookieText => "Usamos cookies para melhorar sua experiência em nosso site. Ao continuar navegando, você aceita nossa",
        Key::CookiePolicy => "política de cookies",
        Key::CookieAccept => "Aceitar",
        Key::CookieReject => "Recusar",
        Key::FooterTagline => "Landing pages que convertem.",
        Key::FooterRights => "Todos os direitos reservados.",
        Key::WhatsappAccessibility => "Fale conosco pelo WhatsApp",
    }
}
