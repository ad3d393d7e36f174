//! `demos/probe.rs` — dispatch probe
//!
//! Three inlets, four outlets. Exercises the parts of the contract the
//! emitter does not touch: startup logging (including an error-level line),
//! instance argument enumeration, the invocation counter, target-inlet
//! awareness, and independent per-channel emission from one call.

use crate::adapter::script::{AdapterBuilder, ScriptAdapter};
use crate::error::ScriptError;
use crate::value::Atom;

/// Build the probe adapter with the given creation arguments.
pub fn adapter(instance_args: Vec<Atom>) -> Result<ScriptAdapter, ScriptError> {
    AdapterBuilder::new("probe")
        .description("startup and dispatch probe")
        .ports(3, 4)
        .inlet_assist(0, "any message the probe understands")
        .instance_args(instance_args)
        .handler("load", |state, _inv, ctx| {
            ctx.post(format!("round(8.448) = {}", 8.448_f64.round()));
            ctx.post(format!("pi = {}", std::f64::consts::PI));
            ctx.error("this is an error !!!");
            // The script-local outlet count is ordinary mutable state. The
            // host keeps routing every declared outlet regardless.
            let before = state.live_outlets;
            state.live_outlets -= 1;
            ctx.post(format!(
                "outlets was {before} and now is {}",
                state.live_outlets
            ));
            ctx.post(format!("the host still routes {} outlets", ctx.outlets()));
            Ok(())
        })?
        .handler("bang", |state, _inv, ctx| {
            ctx.post(format!("has {} instance args", state.instance_args.len()));
            let lines: Vec<String> = state
                .instance_args
                .iter()
                .enumerate()
                .map(|(i, arg)| format!("arg {i} : {arg}"))
                .collect();
            for line in lines {
                ctx.post(line);
            }
            state.counter += 1;
            ctx.post(format!("bang called {} times", state.counter));
            ctx.outlet(0, vec![Atom::Float(1.4), Atom::Float(55.8)]);
            Ok(())
        })?
        .handler("int", |_state, inv, ctx| {
            ctx.post(format!(
                "int {} on inlet {}",
                inv.int(0).unwrap_or(0),
                ctx.inlet()
            ));
            Ok(())
        })?
        .handler("float", |_state, inv, ctx| {
            ctx.post(format!(
                "float {} on inlet {}",
                inv.float(0).unwrap_or(0.0),
                ctx.inlet()
            ));
            Ok(())
        })?
        .handler("args", |_state, inv, ctx| {
            ctx.post(format!("args fn, {} supplied", inv.len()));
            let lines: Vec<String> = inv
                .args()
                .iter()
                .enumerate()
                .map(|(i, arg)| format!("args {i} : {arg}"))
                .collect();
            for line in lines {
                ctx.post(line);
            }
            Ok(())
        })?
        .handler("spread", |_state, inv, ctx| {
            let take = |i: usize| inv.arg(i).cloned().unwrap_or(Atom::Undefined);
            ctx.outlet(0, vec![take(0), take(1), take(2)]);
            ctx.outlet(1, vec![take(1), take(0), take(2)]);
            Ok(())
        })?
        .require(&["load", "bang"])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::engine::ScriptHost;
    use crate::host::event::HostEvent;

    fn probe_host(args: Vec<Atom>) -> (ScriptHost, i64) {
        let mut host = ScriptHost::new();
        let id = host.register(adapter(args).unwrap());
        (host, id)
    }

    #[test]
    fn load_logs_startup_lines_and_decrements_live_outlets() {
        let (mut host, id) = probe_host(vec![]);
        let result = host.load(id);
        assert!(result.success);
        assert!(result.output.contains(&"[info] round(8.448) = 8".to_string()));
        assert!(result
            .output
            .contains(&"[error] this is an error !!!".to_string()));
        assert!(result
            .output
            .contains(&"[info] outlets was 4 and now is 3".to_string()));
        // Decoupled: script-local copy moved, the declaration did not.
        let adapter = host.adapter(id).unwrap();
        assert_eq!(adapter.state().live_outlets, 3);
        assert_eq!(adapter.ports().outlets(), 4);
    }

    #[test]
    fn bang_counts_and_emits_the_fixed_pair() {
        let (mut host, id) = probe_host(vec![Atom::Symbol("jojo".into()), Atom::Int(12)]);
        host.load(id);
        for expected in 1..=3u64 {
            let result = host.deliver(id, &HostEvent::bang());
            assert!(result.success);
            assert_eq!(host.adapter(id).unwrap().state().counter, expected);
            assert_eq!(result.emissions.len(), 1);
            assert_eq!(result.emissions[0].outlet, 0);
            assert_eq!(
                result.emissions[0].values,
                vec![Atom::Float(1.4), Atom::Float(55.8)]
            );
            assert!(result
                .output
                .contains(&format!("[info] bang called {expected} times")));
        }
    }

    #[test]
    fn bang_enumerates_instance_args() {
        let (mut host, id) = probe_host(vec![Atom::Symbol("jojo".into()), Atom::Int(12)]);
        host.load(id);
        let result = host.deliver(id, &HostEvent::bang());
        assert!(result.output.contains(&"[info] has 2 instance args".to_string()));
        assert!(result.output.contains(&"[info] arg 0 : jojo".to_string()));
        assert!(result.output.contains(&"[info] arg 1 : 12".to_string()));
    }

    #[test]
    fn numeric_handlers_see_their_target_inlet() {
        let (mut host, id) = probe_host(vec![]);
        host.load(id);
        let result = host.deliver(id, &HostEvent::Int { inlet: 2, value: 9 });
        assert!(result.output.contains(&"[info] int 9 on inlet 2".to_string()));
        let result = host.deliver(
            id,
            &HostEvent::Float {
                inlet: 1,
                value: 3.25,
            },
        );
        assert!(result
            .output
            .contains(&"[info] float 3.25 on inlet 1".to_string()));
    }

    #[test]
    fn args_enumerates_every_supplied_argument() {
        let (mut host, id) = probe_host(vec![]);
        host.load(id);
        let supplied = vec![
            Atom::Int(1),
            Atom::Symbol("two".into()),
            Atom::Float(3.5),
            Atom::Null,
        ];
        let result = host.deliver(id, &HostEvent::message("args", supplied));
        assert!(result.output.contains(&"[info] args fn, 4 supplied".to_string()));
        assert!(result.output.contains(&"[info] args 3 : null".to_string()));
    }

    #[test]
    fn spread_emits_independent_lists_per_channel() {
        let (mut host, id) = probe_host(vec![]);
        host.load(id);
        let result = host.deliver(
            id,
            &HostEvent::message(
                "spread",
                vec![Atom::Int(1), Atom::Int(2), Atom::Int(3)],
            ),
        );
        assert_eq!(result.emissions.len(), 2);
        let first = result.emissions.iter().find(|e| e.outlet == 0).unwrap();
        let second = result.emissions.iter().find(|e| e.outlet == 1).unwrap();
        assert_eq!(first.values, vec![Atom::Int(1), Atom::Int(2), Atom::Int(3)]);
        assert_eq!(second.values, vec![Atom::Int(2), Atom::Int(1), Atom::Int(3)]);
    }

    #[test]
    fn inlet_assist_label_is_queryable() {
        let (host, id) = {
            let mut host = ScriptHost::new();
            let id = host.register(adapter(vec![]).unwrap());
            (host, id)
        };
        let ports = host.adapter(id).unwrap().ports();
        assert_eq!(ports.inlet_assist(0), Some("any message the probe understands"));
        assert_eq!(ports.inlet_assist(1), None);
    }
}
