//! `demos/emitter.rs` — emission pattern showcase
//!
//! One inlet, one outlet. Every handler emits a different shape: plain
//! echoes, multi-value lists, nested sequences, a lexicographic sort, a
//! regex token swap, and the two "empty-ish" kinds (`null` / `undefined`)
//! that are still real emissions.

use regex::Regex;

use crate::adapter::script::{AdapterBuilder, ScriptAdapter};
use crate::error::ScriptError;
use crate::value::Atom;

/// Build the emitter adapter.
pub fn adapter() -> Result<ScriptAdapter, ScriptError> {
    let swap_re = Regex::new(r"(\w+)\s(\w+)").map_err(|e| ScriptError::Handler {
        name: "swap".into(),
        message: e.to_string(),
    })?;

    AdapterBuilder::new("emitter")
        .description("emission composition patterns")
        .ports(1, 1)
        .handler("bang", |_state, _inv, ctx| {
            ctx.outlet(0, vec![Atom::Symbol("bang".into())]);
            Ok(())
        })?
        .handler("int", |_state, inv, ctx| {
            if let Some(value) = inv.int(0) {
                ctx.outlet(0, vec![Atom::Int(value)]);
            }
            Ok(())
        })?
        .handler("float", |_state, inv, ctx| {
            if let Some(value) = inv.float(0) {
                ctx.outlet(0, vec![Atom::Float(value)]);
            }
            Ok(())
        })?
        // Sorts on the stringified forms. "42" lands between "0.8" and
        // "jojo zaza" no matter what a numeric sort would say.
        .handler("sorted", |_state, inv, ctx| {
            let mut args = inv.args().to_vec();
            args.sort_by(|a, b| a.lexical_cmp(b));
            ctx.outlet(0, args);
            Ok(())
        })?
        .handler("list", |_state, _inv, ctx| {
            ctx.outlet(
                0,
                vec![
                    Atom::Symbol("toasty".into()),
                    Atom::Float(0.8),
                    Atom::Int(42),
                    Atom::Symbol("toto".into()),
                    Atom::Symbol("jojo zaza".into()),
                ],
            );
            Ok(())
        })?
        .handler("array", |_state, _inv, ctx| {
            ctx.outlet(0, vec![Atom::List(sample_array())]);
            Ok(())
        })?
        .handler("nested", |_state, _inv, ctx| {
            ctx.outlet(
                0,
                vec![Atom::List(vec![Atom::List(sample_array()), Atom::Int(23)])],
            );
            Ok(())
        })?
        .handler("swap", move |_state, inv, ctx| {
            let input = inv.symbol(0).unwrap_or("Alain Dupont");
            let swapped = swap_re.replace(input, "$2, $1");
            ctx.outlet(0, vec![Atom::Symbol(swapped.into_owned())]);
            Ok(())
        })?
        .handler("null", |_state, _inv, ctx| {
            ctx.outlet(0, vec![Atom::Null]);
            Ok(())
        })?
        .handler("undefined", |_state, _inv, ctx| {
            ctx.outlet(0, vec![Atom::Undefined]);
            Ok(())
        })?
        .require(&["bang", "int", "float"])
        .build()
}

fn sample_array() -> Vec<Atom> {
    vec![
        Atom::Float(1.4),
        Atom::Int(42),
        Atom::Symbol("test".into()),
        Atom::Symbol("jojo zaza".into()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::engine::ScriptHost;
    use crate::host::event::HostEvent;

    fn loaded_host() -> (ScriptHost, i64) {
        let mut host = ScriptHost::new();
        let id = host.register(adapter().unwrap());
        assert!(host.load(id).success);
        (host, id)
    }

    #[test]
    fn bang_emits_the_bang_symbol() {
        let (mut host, id) = loaded_host();
        let result = host.deliver(id, &HostEvent::bang());
        assert_eq!(result.emissions.len(), 1);
        assert_eq!(result.emissions[0].outlet, 0);
        assert_eq!(result.emissions[0].values, vec![Atom::Symbol("bang".into())]);
    }

    #[test]
    fn int_and_float_echo() {
        let (mut host, id) = loaded_host();
        let result = host.deliver(id, &HostEvent::Int { inlet: 0, value: 7 });
        assert_eq!(result.emissions[0].values, vec![Atom::Int(7)]);
        let result = host.deliver(
            id,
            &HostEvent::Float {
                inlet: 0,
                value: 2.5,
            },
        );
        assert_eq!(result.emissions[0].values, vec![Atom::Float(2.5)]);
    }

    #[test]
    fn sorted_is_lexicographic_on_stringified_forms() {
        let (mut host, id) = loaded_host();
        let result = host.deliver(
            id,
            &HostEvent::message(
                "sorted",
                vec![
                    Atom::Symbol("toasty".into()),
                    Atom::Float(0.8),
                    Atom::Int(42),
                    Atom::Symbol("toto".into()),
                    Atom::Symbol("jojo zaza".into()),
                ],
            ),
        );
        assert_eq!(result.emissions.len(), 1);
        let order: Vec<String> = result.emissions[0]
            .values
            .iter()
            .map(|a| a.to_string())
            .collect();
        assert_eq!(order, vec!["0.8", "42", "jojo zaza", "toasty", "toto"]);
    }

    #[test]
    fn list_emits_five_scalars_in_one_emission() {
        let (mut host, id) = loaded_host();
        let result = host.deliver(id, &HostEvent::message("list", vec![]));
        assert_eq!(result.emissions.len(), 1);
        assert_eq!(result.emissions[0].values.len(), 5);
        assert_eq!(result.emissions[0].values[0], Atom::Symbol("toasty".into()));
        assert_eq!(result.emissions[0].values[4], Atom::Symbol("jojo zaza".into()));
    }

    #[test]
    fn nested_emission_keeps_depth_two() {
        let (mut host, id) = loaded_host();
        let result = host.deliver(id, &HostEvent::message("nested", vec![]));
        assert_eq!(result.emissions.len(), 1);
        let values = &result.emissions[0].values;
        assert_eq!(values.len(), 1);
        let outer = values[0].as_list().expect("outer list");
        assert_eq!(outer.len(), 2);
        let inner = outer[0].as_list().expect("inner list");
        assert_eq!(inner.len(), 4);
        assert_eq!(inner[0], Atom::Float(1.4));
        assert_eq!(outer[1], Atom::Int(23));
    }

    #[test]
    fn swap_reorders_captured_tokens() {
        let (mut host, id) = loaded_host();
        let result = host.deliver(
            id,
            &HostEvent::message("swap", vec![Atom::Symbol("Alain Dupont".into())]),
        );
        assert_eq!(
            result.emissions[0].values,
            vec![Atom::Symbol("Dupont, Alain".into())]
        );
    }

    #[test]
    fn null_and_undefined_are_distinct_emissions() {
        let (mut host, id) = loaded_host();
        let null_run = host.deliver(id, &HostEvent::message("null", vec![]));
        let undef_run = host.deliver(id, &HostEvent::message("undefined", vec![]));
        assert_eq!(null_run.emissions[0].values, vec![Atom::Null]);
        assert_eq!(undef_run.emissions[0].values, vec![Atom::Undefined]);
        assert_ne!(null_run.emissions[0].values, undef_run.emissions[0].values);
        // Both are real emission records, unlike a handler that stays silent.
        assert_eq!(null_run.emissions.len(), 1);
        assert_eq!(undef_run.emissions.len(), 1);
    }
}
