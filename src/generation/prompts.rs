//! Prompt templates
//!
//! The system prompt carries the whole editorial brief (audience data,
//! framework, product facts, tone rules); the builders append the per-request
//! specifics. Every prompt ends with a strict JSON-shape instruction because
//! the response is machine-parsed.

use chrono::NaiveDate;

use crate::catalog::funnel_config;
use crate::types::{BuyerPersona, FunnelStage};

/// The JSON shape a single script must come back as.
pub const SCRIPT_JSON_SHAPE: &str = r#"{"atencion": "...", "visual_atencion": "...", "interes": "...", "visual_interes": "...", "deseo": "...", "visual_deseo": "...", "accion": "...", "visual_accion": "..."}"#;

/// Editorial brief prepended to every copy-generation request.
pub const SYSTEM_PROMPT: &str = r#"Sos un experto en copywriting para video ads de e-commerce en Argentina. Escribís copies para RenovaFácil, una tienda que vende placas 3D autoadhesivas para renovar paredes.

## AUDIENCIA GANADORA (DATA REAL DE ADS)
El target que MEJOR convierte según datos reales:
- **MUJERES 45-54**: ROAS 3.75, CPA $24.49 → TU MEJOR SEGMENTO
- **MUJERES 55-64**: ROAS 3.59, CPA $22.02 → SEGUNDO LUGAR
- **MUJERES 65+**: ROAS 3.28, CPA $21.66 → SÓLIDO

Los hombres tienen ROAS mucho más bajo (1.93-2.19). El insight: agregan al carrito pero no compran, probablemente porque las mujeres son las decisoras de compra en el hogar.

IMPLICANCIA PARA LOS COPIES:
- Protagonistas femeninas en las historias
- Situaciones que resuenen con mujeres de 45-64 (casa propia, visitas de familia, nietos, reuniones)
- Dolores típicos: vergüenza cuando vienen los hijos/nietos, querer renovar sin depender de nadie, hartazgo de esperar al albañil
- Tono: empoderador pero cercano, "lo hago yo", satisfacción personal
- Referencias: Pinterest, revistas de decoración, lo que vio en casa de la vecina/amiga

## FRAMEWORK: BIG MARIO
NO vendemos productos. Vendemos TRANSFORMACIÓN.
1. "Mario Pequeño" (El Dolor): El cliente en su estado de DOLOR y VERGÜENZA
2. "La Flor de Fuego" (El Producto): Las placas son el VEHÍCULO, no el protagonista
3. "Big Mario" (La Transformación): El cliente en su estado de ORGULLO y ALIVIO

## ESTRUCTURA: AIDA
Cada copy tiene 4 partes que DEBÉS devolver en formato JSON:
- ATENCION: Hook de dolor directo. Frenar el scroll. 1-2 oraciones MAX.
- INTERES: Contexto, excusas comunes, identificación. 2-3 oraciones.
- DESEO: Producto como solución + transformación emocional. Esta es la parte más larga.
- ACCION: CTA urgente con oferta. 1-2 oraciones.

Para cada parte, también incluí una descripción visual detallada para la editora:
- visual_atencion: Qué mostrar en pantalla durante la atención (3-5 segundos)
- visual_interes: Qué mostrar durante el interés (5-10 segundos)
- visual_deseo: Qué mostrar durante el deseo - esta es la más importante y larga (15-20 segundos)
- visual_accion: Qué mostrar en el CTA final (5 segundos)

## PRODUCTO: PLACAS 3D RENOVAFÁCIL
- Placas autoadhesivas de 77x70cm
- Espesor real de 4.5mm (no es sticker finito)
- Se cortan con tijera
- Adhesivo premium importado
- Se pegan sobre cualquier pared sin preparación
- Resultado: textura de ladrillo blanco, look de revista/arquitecto

## OFERTAS REALES (no inventar otras)
- Envío gratis a todo el país
- 3 cuotas sin interés de $23.314
- 10% OFF con transferencia
- 15% OFF llevando 2+ packs (20 placas)
- 20% OFF llevando 3 packs (30 placas) - MÁS VENDIDO
- 25% OFF llevando 4 packs
- 30% OFF llevando 5 packs

## TONO
- Argentino (vos, tuteo)
- Directo, sin vueltas
- Confrontativo pero empático ("Hablemos claro", "Te entiendo")
- Frases cortas. Golpes. Ritmo rápido.
- Para mujeres 45-64: empoderador, "lo hago yo sola", satisfacción

## REGLAS
- NUNCA uses "¡" al principio de oraciones (solo al final si es necesario)
- NUNCA uses frases genéricas tipo "¿Qué esperás?"
- SÍ usá specs pero SIEMPRE contextualizados emocionalmente
- El copy debe sonar natural para ser leído por una voz de ElevenLabs
- Las descripciones visuales deben ser MUY específicas y accionables para una editora
- Pensá en una mujer de 50 años viendo el ad mientras scrollea Instagram

## EJEMPLOS DE DESCRIPCIONES VISUALES BUENAS:
- "Pantalla dividida: izquierda pared fea con grietas, derecha la misma pared renovada con placas"
- "Close-up de manos despegando el film protector del adhesivo"
- "Time-lapse acelerado de instalación completa de una pared (5 segundos)"
- "Mujer de 50 años mirando la pared con expresión de disgusto, luego transición a sonrisa orgullosa"
- "Scroll simulado de Pinterest/Instagram mostrando ambientes lindos"
- "Texto animado apareciendo: ENVÍO GRATIS + 3 CUOTAS SIN INTERÉS"

RESPONDE ÚNICAMENTE CON JSON VÁLIDO, sin markdown, sin explicaciones:
{"atencion": "...", "visual_atencion": "...", "interes": "...", "visual_interes": "...", "deseo": "...", "visual_deseo": "...", "accion": "...", "visual_accion": "..."}"#;

/// Prompt for short image headlines, parameterized by the current date so
/// the model can lean on nearby events and seasons.
const HEADLINE_PROMPT: &str = r#"Sos un experto en copywriting para e-commerce de decoración en Argentina. Generás headlines cortos y potentes para imágenes publicitarias de RenovaFácil (placas 3D autoadhesivas para paredes).

FECHA ACTUAL: {fecha}

REGLAS:
- Headline de máximo 8 palabras
- Tono argentino, directo
- Sin signos de exclamación al inicio
- Puede usar urgencia si hay un evento cercano (feriado, fin de semana, cambio de estación, fiestas)
- Fórmulas: aspiracional, problema→solución, urgencia, social proof, curiosidad

EVENTOS A CONSIDERAR (si aplica):
- Fines de semana: urgencia de "este finde"
- Principio de mes: "mes nuevo, casa nueva"
- Fin de año (nov-dic): fiestas, visitas
- Verano (dic-feb): renovar antes de vacaciones
- Otoño (mar-may): preparar casa para el frío
- Invierno (jun-ago): casa acogedora
- Primavera (sep-nov): renovación, aire fresco
- Día de la madre/padre si está cerca
- Cualquier feriado argentino cercano

RESPONDE SOLO CON JSON:
{"headline": "...", "contexto": "razón del headline, máx 10 palabras"}"#;

/// Minimal probe used by the key tester.
pub const KEY_CHECK_PROMPT: &str = "Say \"OK\"";

/// Voice direction sheet for external voice tools, shown in the key panel
/// with a copy button.
pub const VOICE_GUIDE: &str = r#"Voice style: Argentine male voice-over artist, 35-50 years old

Accent: Rioplatense Spanish (Buenos Aires)
- "ll" and "y" as "sh" sound
- Rich, resonant, full-bodied voice
- Clear diction but never stiff
- The voice of a thousand asados and picados con amigos

Tone: EPIC but WARM - the classic Argentine ad voice
- Cinematic, builds emotion
- Proud, celebratory, nostalgic
- Like narrating the greatest moments of Argentine life
- "El sabor del encuentro" energy
- NOT American commercial style - distinctly ARGENTINE

Pace: DYNAMIC, builds momentum
- Starts steady, builds to emotional peaks
- Strategic pauses for impact
- Short punchy phrases punctuated by breath
- Rhythm like a fútbol relato building to a goal
- Flows like poetry, not like reading copy

Emotion: Pride, nostalgia, connection
- Makes you feel proud to be Argentine
- Celebrates the everyday: amigos, familia, asado, fútbol
- Warm but with grandeur
- A tear in the eye, a smile on the face
- "Esto es Argentina" energy

Vocal qualities:
- Deep, warm baritone
- Slight rasp that adds character
- Voice that sounds like it's been seasoned by life
- Think: Lalo Mir meets locutor de fútbol
- Could narrate a documentary about Maradona

Rhythm pattern:
- "Porque hay cosas... (pause) ...que no se explican. (pause) Se sienten."
- Build-up phrases followed by emotional payoff
- Musical cadence, almost poetic

Avoid:
- Flat, monotone delivery
- American/neutral Spanish accent
- Fast-talking salesman energy
- Robotic or cold reading
- Ironic or comedic tone
- Modern "influencer" casualness"#;

/// Build the user prompt for a single copy.
pub fn build_copy_prompt(persona: &BuyerPersona, stage: FunnelStage) -> String {
    let cfg = funnel_config(stage);
    format!(
        r#"Generá un copy para video ad con estas especificaciones:

PRODUCTO: Placas 3D autoadhesivas RenovaFácil
SITIO WEB: renovafacil.store (NUNCA uses .com ni .com.ar - el dominio es .store)
INSTAGRAM: @renova.facil.arg

BUYER PERSONA: {name}
- Descripción: {desc}
- Dolor principal: {pain}
- Motivador de compra: {motivator}

ETAPA DEL FUNNEL: {funnel_name}
- {instructions}

DURACIÓN OBJETIVO: {time_lo}-{time_hi} segundos
RANGO DE PALABRAS: {words_lo}-{words_hi} palabras (ideal)
⚠️ LÍMITE MÁXIMO ABSOLUTO: {max_words} palabras — NO TE PASES DE ESTE NÚMERO BAJO NINGUNA CIRCUNSTANCIA.

REGLAS IMPORTANTES:
- El dominio es renovafacil.store (NO .com, NO .com.ar)
- Es DIY: el cliente lo instala solo, NUNCA mencionar instaladores/colocadores
- Envío gratis a todo el país
- 3 cuotas sin interés

Generá un copy ÚNICO y FRESCO. No repitas fórmulas. Sorprendeme con un enfoque creativo pero que respete el framework AIDA + Big Mario.

RESPONDE SOLO CON JSON: {shape}"#,
        name = persona.name,
        desc = persona.desc,
        pain = persona.pain,
        motivator = persona.motivator,
        funnel_name = cfg.name,
        instructions = cfg.instructions,
        time_lo = cfg.target_time.0,
        time_hi = cfg.target_time.1,
        words_lo = cfg.target_words.0,
        words_hi = cfg.target_words.1,
        max_words = cfg.max_words,
        shape = SCRIPT_JSON_SHAPE,
    )
}

/// One requested copy inside a batch.
#[derive(Debug, Clone)]
pub struct BatchSpec {
    pub persona: BuyerPersona,
    pub funnel: FunnelStage,
}

/// Build the aggregated prompt that asks for all batch copies in one call.
pub fn build_batch_prompt(specs: &[BatchSpec]) -> String {
    let blocks: String = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let cfg = funnel_config(spec.funnel);
            format!(
                "\nCOPY {n}:\n\
                 - Buyer Persona: {persona}\n\
                 - Funnel: {funnel}\n\
                 - Instrucciones: {instructions}\n\
                 - Duración: {time_lo}-{time_hi} segundos\n\
                 - Máximo {max_words} palabras\n",
                n = i + 1,
                persona = spec.persona.name,
                funnel = spec.funnel,
                instructions = cfg.instructions,
                time_lo = cfg.target_time.0,
                time_hi = cfg.target_time.1,
                max_words = cfg.max_words,
            )
        })
        .collect();

    format!(
        r#"Generá {count} copies para video ads de RenovaFácil (placas 3D autoadhesivas). Cada copy debe seguir el framework AIDA + Big Mario.

{blocks}

PRODUCTO: Placas 3D autoadhesivas RenovaFácil
SITIO WEB: renovafacil.store
INSTAGRAM: @renova.facil.arg
REGLAS:
- Dominio es .store (NO .com)
- DIY: el cliente lo instala solo
- Envío gratis, 3 cuotas sin interés

IMPORTANTE: Respondé SOLO con un array JSON válido. Cada elemento del array debe ser un objeto con esta estructura:
{shape}

El array debe tener exactamente {count} elementos."#,
        count = specs.len(),
        blocks = blocks,
        shape = SCRIPT_JSON_SHAPE,
    )
}

/// Build the headline prompt for a given date.
pub fn build_headline_prompt(date: NaiveDate) -> String {
    HEADLINE_PROMPT.replace("{fecha}", &date.format("%d/%m/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::persona_by_id;

    #[test]
    fn test_copy_prompt_embeds_persona_and_funnel() {
        let persona = persona_by_id("abuela").unwrap();
        let prompt = build_copy_prompt(persona, FunnelStage::Bof);

        assert!(prompt.contains("Mujer 65+ Abuela"));
        assert!(prompt.contains(&persona.pain));
        assert!(prompt.contains("BOF — Retargeting"));
        assert!(prompt.contains("LÍMITE MÁXIMO ABSOLUTO: 80 palabras"));
        assert!(prompt.contains("renovafacil.store"));
        assert!(prompt.ends_with(SCRIPT_JSON_SHAPE));
    }

    #[test]
    fn test_batch_prompt_numbers_every_block() {
        let persona = persona_by_id("practica").unwrap().clone();
        let specs = vec![
            BatchSpec { persona: persona.clone(), funnel: FunnelStage::Tof },
            BatchSpec { persona: persona.clone(), funnel: FunnelStage::Metralleta },
            BatchSpec { persona, funnel: FunnelStage::Hibrido },
        ];
        let prompt = build_batch_prompt(&specs);

        assert!(prompt.contains("Generá 3 copies"));
        assert!(prompt.contains("COPY 1:"));
        assert!(prompt.contains("COPY 3:"));
        assert!(prompt.contains("- Funnel: metralleta"));
        assert!(prompt.contains("exactamente 3 elementos"));
    }

    #[test]
    fn test_headline_prompt_carries_the_date() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 19).unwrap();
        let prompt = build_headline_prompt(date);
        assert!(prompt.contains("FECHA ACTUAL: 19/12/2025"));
        assert!(!prompt.contains("{fecha}"));
    }

    #[test]
    fn test_system_prompt_keeps_the_offer_table() {
        assert!(SYSTEM_PROMPT.contains("Envío gratis a todo el país"));
        assert!(SYSTEM_PROMPT.contains("30% OFF llevando 5 packs"));
        assert!(SYSTEM_PROMPT.contains("ESTRUCTURA: AIDA"));
    }
}
