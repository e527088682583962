use serde::{Deserialize, Serialize};

/// Business-category tag used to pick a canned example sentence for the
/// prompt preamble. `Otro` carries no example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Niche {
    Coach,
    Consultor,
    AgenciaMarketing,
    Ecommerce,
    Infoproductos,
    SaludBienestar,
    FinanzasPersonales,
    Inmobiliaria,
    EducacionOnline,
    Otro,
}

impl Niche {
    pub const ALL: [Niche; 10] = [
        Niche::Coach,
        Niche::Consultor,
        Niche::AgenciaMarketing,
        Niche::Ecommerce,
        Niche::Infoproductos,
        Niche::SaludBienestar,
        Niche::FinanzasPersonales,
        Niche::Inmobiliaria,
        Niche::EducacionOnline,
        Niche::Otro,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Niche::Coach => "Coach",
            Niche::Consultor => "Consultor",
            Niche::AgenciaMarketing => "Agencia de marketing",
            Niche::Ecommerce => "Ecommerce",
            Niche::Infoproductos => "Infoproductos",
            Niche::SaludBienestar => "Salud y bienestar",
            Niche::FinanzasPersonales => "Finanzas personales",
            Niche::Inmobiliaria => "Inmobiliaria",
            Niche::EducacionOnline => "Educación online",
            Niche::Otro => "Otro",
        }
    }

    /// Canned example hook shown to the model as a tone reference.
    pub fn example(&self) -> &'static str {
        match self {
            Niche::Coach => {
                "¿Te imaginas acompañar a tus clientes a resultados reales en 90 días, sin perseguirlos sesión tras sesión?"
            }
            Niche::Consultor => {
                "Tus clientes no compran horas de consultoría: compran la tranquilidad de que alguien ya resolvió este problema antes."
            }
            Niche::AgenciaMarketing => {
                "Mientras tu competencia promete clics, tú puedes prometer clientes: campañas que se pagan solas en el primer mes."
            }
            Niche::Ecommerce => {
                "Cada visita que abandona tu tienda sin comprar es dinero que ya pagaste en publicidad y dejaste ir."
            }
            Niche::Infoproductos => {
                "Convierte lo que ya sabes en un curso que se vende mientras duermes, sin grabar cien horas de vídeo."
            }
            Niche::SaludBienestar => {
                "No necesitas otra dieta milagro: necesitas un plan que encaje en tu vida real, con tu agenda real."
            }
            Niche::FinanzasPersonales => {
                "Llegar a fin de mes no debería ser tu única meta financiera: empieza a construir el colchón que te deje dormir tranquilo."
            }
            Niche::Inmobiliaria => {
                "Vender tu casa no tiene por qué llevar un año de visitas inútiles: los compradores correctos ya existen, solo hay que ponerla delante de ellos."
            }
            Niche::EducacionOnline => {
                "Tus alumnos no abandonan por falta de contenido, abandonan por falta de acompañamiento: eso es exactamente lo que vamos a cambiar."
            }
            Niche::Otro => "",
        }
    }

    pub fn from_label(label: &str) -> Option<Niche> {
        let wanted = label.trim();
        Niche::ALL
            .into_iter()
            .find(|niche| niche.label().eq_ignore_ascii_case(wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::Niche;

    #[test]
    fn labels_round_trip() {
        for niche in Niche::ALL {
            assert_eq!(Niche::from_label(niche.label()), Some(niche));
        }
    }

    #[test]
    fn unknown_label_is_none() {
        assert_eq!(Niche::from_label("Astrología"), None);
        assert_eq!(Niche::from_label(""), None);
    }

    #[test]
    fn only_otro_has_empty_example() {
        for niche in Niche::ALL {
            if niche == Niche::Otro {
                assert!(niche.example().is_empty());
            } else {
                assert!(!niche.example().is_empty());
            }
        }
    }
}
