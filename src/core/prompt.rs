use crate::core::request::ScriptRequest;

/// Builds the full instruction document sent as the user message. Pure and
/// total: every request, including one with all fields empty, produces a
/// well-formed document with the nine structural beats in order and every
/// field interpolated verbatim.
pub fn build_prompt(request: &ScriptRequest) -> String {
    let mut prompt = String::new();

    if let Some(niche) = request.niche {
        prompt.push_str(&format!("Nicho del negocio: {}\n", niche.label()));
        let example = request.niche_example();
        if !example.is_empty() {
            prompt.push_str(&format!("Ejemplo de gancho para este nicho: {example}\n"));
        }
        prompt.push('\n');
    }

    prompt.push_str(&format!(
        "Eres un copywriter profesional, experto en Video Sales Letters.
Tu tarea: generar un guion completo de VSL en ESPAÑOL de **entre 600 y 800 palabras** (≈4,5-6,5 min de lectura en voz alta; nunca sobrepases 7 min).
Usa un tono **formal, profesional y cercano**, que inspire confianza, con lenguaje llano, sin tecnicismos, hablando siempre de tú al espectador.

### Estructura obligatoria:
1. Hook inicial impactante.
2. Historia personal breve.
3. Exposición del dolor/problema.
4. Presentación del producto/servicio como solución.
5. Beneficios principales, en puntos breves.
6. Testimonios creíbles, con nombre de pila y profesión.
7. Objeciones frecuentes (mínimo tres) con sus rebatidas.
8. Garantía ofrecida.
9. Llamada a la acción final, fuerte y específica.

### Datos para personalizar:
- Producto: {product}
- Presentador: {presenter}
- Público: {audience}
- Problema: {pain}
- Beneficios: {benefits}
- Precio: {pricing}
- Garantía: {guarantee}
- CTA: {cta}
",
        product = request.product,
        presenter = request.presenter,
        audience = request.audience,
        pain = request.pain_point,
        benefits = request.benefits,
        pricing = request.pricing,
        guarantee = request.guarantee,
        cta = request.call_to_action,
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::build_prompt;
    use crate::core::niche::Niche;
    use crate::core::request::ScriptRequest;

    fn request_with(niche: Option<Niche>) -> ScriptRequest {
        ScriptRequest {
            product: "Curso de Ventas".into(),
            presenter: "Laura".into(),
            audience: "coaches".into(),
            pain_point: "pocas ventas".into(),
            benefits: "más clientes, menos estrés".into(),
            pricing: "297€ en un pago".into(),
            guarantee: "30 días".into(),
            call_to_action: "Reserva tu plaza".into(),
            niche,
        }
    }

    const BEATS: [&str; 9] = [
        "1. Hook inicial",
        "2. Historia personal",
        "3. Exposición del dolor",
        "4. Presentación del producto",
        "5. Beneficios principales",
        "6. Testimonios",
        "7. Objeciones",
        "8. Garantía",
        "9. Llamada a la acción",
    ];

    #[test]
    fn nine_beats_in_fixed_order() {
        let prompt = build_prompt(&request_with(None));
        let mut last = 0;
        for beat in BEATS {
            let pos = prompt.find(beat).unwrap_or_else(|| panic!("missing beat: {beat}"));
            assert!(pos > last, "beat out of order: {beat}");
            last = pos;
        }
    }

    #[test]
    fn all_fields_verbatim() {
        let request = request_with(None);
        let prompt = build_prompt(&request);
        for value in [
            &request.product,
            &request.presenter,
            &request.audience,
            &request.pain_point,
            &request.benefits,
            &request.pricing,
            &request.guarantee,
            &request.call_to_action,
        ] {
            assert!(prompt.contains(value.as_str()), "missing field value: {value}");
        }
    }

    #[test]
    fn empty_fields_still_well_formed() {
        let request = ScriptRequest {
            product: String::new(),
            presenter: String::new(),
            audience: String::new(),
            pain_point: String::new(),
            benefits: String::new(),
            pricing: String::new(),
            guarantee: String::new(),
            call_to_action: String::new(),
            niche: None,
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("### Estructura obligatoria:"));
        assert!(prompt.contains("### Datos para personalizar:"));
        assert!(prompt.contains("- CTA: "));
    }

    #[test]
    fn niche_example_prepended_before_structure() {
        let prompt = build_prompt(&request_with(Some(Niche::Ecommerce)));
        let niche_pos = prompt.find("Nicho del negocio: Ecommerce").expect("niche line");
        let example_pos = prompt.find(Niche::Ecommerce.example()).expect("example line");
        let structure_pos = prompt.find("### Estructura obligatoria:").expect("structure");
        assert!(niche_pos < structure_pos);
        assert!(example_pos < structure_pos);
    }

    #[test]
    fn no_niche_means_no_example_section() {
        let prompt = build_prompt(&request_with(None));
        assert!(!prompt.contains("Nicho del negocio:"));
        assert!(!prompt.contains("Ejemplo de gancho"));
    }

    #[test]
    fn otro_niche_has_no_example_line() {
        let prompt = build_prompt(&request_with(Some(Niche::Otro)));
        assert!(prompt.contains("Nicho del negocio: Otro"));
        assert!(!prompt.contains("Ejemplo de gancho"));
    }

    #[test]
    fn every_table_niche_example_appears() {
        for niche in Niche::ALL {
            let prompt = build_prompt(&request_with(Some(niche)));
            assert!(prompt.contains(niche.label()));
            assert!(prompt.contains(niche.example()));
        }
    }

    #[test]
    fn coach_request_with_x_fields() {
        let request = ScriptRequest {
            product: "X".into(),
            presenter: "X".into(),
            audience: "X".into(),
            pain_point: "X".into(),
            benefits: "X".into(),
            pricing: "X".into(),
            guarantee: "X".into(),
            call_to_action: "X".into(),
            niche: Some(Niche::Coach),
        };
        let prompt = build_prompt(&request);
        assert!(prompt.contains("Coach"));
        assert!(prompt.contains(Niche::Coach.example()));
        let occurrences = prompt.matches(": X").count();
        assert_eq!(occurrences, 8, "expected the eight field values verbatim");
    }
}
