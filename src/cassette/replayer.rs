//! Replays recorded interactions from a cassette.

use std::collections::HashMap;

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Replays interactions from a loaded cassette, per port/method pair.
///
/// Requests issued concurrently complete (and are recorded) in any order, so
/// lookups pick the first unconsumed interaction whose input equals the call's
/// input rather than the next one in recording order.
pub struct CassetteReplayer {
    /// Per port+method queue of interactions (in order).
    queues: HashMap<PortMethodKey, Vec<Interaction>>,
    /// Per port+method flags marking interactions already served.
    consumed: HashMap<PortMethodKey, Vec<bool>>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, Vec<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            queues.entry(key).or_default().push(interaction.clone());
        }
        let consumed = queues.iter().map(|(k, q)| (k.clone(), vec![false; q.len()])).collect();
        Self { queues, consumed }
    }

    /// Return the interaction to serve for a call with the given input.
    ///
    /// # Errors
    ///
    /// Returns a descriptive message when the cassette has no (more)
    /// interactions for the port/method combination, or when none of the
    /// unconsumed ones was recorded for this input.
    pub fn next_interaction(
        &mut self,
        port: &str,
        method: &str,
        input: &serde_json::Value,
    ) -> Result<Interaction, String> {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };

        let Some(queue) = self.queues.get(&key) else {
            let available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            return Err(format!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            ));
        };
        let consumed = self.consumed.entry(key).or_insert_with(|| vec![false; queue.len()]);

        let pending = consumed.iter().filter(|served| !**served).count();
        if pending == 0 {
            return Err(format!(
                "Cassette exhausted: all {count} interactions for port={port:?} \
                 method={method:?} have been consumed. Last interaction was seq={last_seq}.",
                count = queue.len(),
                last_seq = queue.last().map_or(0, |i| i.seq),
            ));
        }
        let index = (0..queue.len())
            .find(|&i| !consumed[i] && &queue[i].input == input)
            .ok_or_else(|| {
                format!(
                    "Cassette mismatch: none of the {pending} unconsumed interactions for \
                     port={port:?} method={method:?} was recorded with input {input}"
                )
            })?;

        consumed[index] = true;
        Ok(queue[index].clone())
    }
}
