// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event pattern matching and subscriptions

use crate::campaign::CampaignId;
use crate::event::Event;

/// Pattern for matching events
/// Supports:
///   - Exact: "phase:completed"
///   - Single wildcard: "phase:*" matches "phase:started", "phase:failed"
///   - Category: "guidance:**" matches all guidance events
#[derive(Clone, Debug)]
pub struct EventPattern(String);

impl EventPattern {
    pub fn new(pattern: &str) -> Self {
        Self(pattern.to_string())
    }

    /// Check if this pattern matches an event name
    pub fn matches(&self, event_name: &str) -> bool {
        // Empty pattern matches nothing
        if self.0.is_empty() {
            return false;
        }

        if self.0 == "*" || self.0 == "**" {
            return true;
        }

        let pattern_parts: Vec<&str> = self.0.split(':').collect();
        let event_parts: Vec<&str> = event_name.split(':').collect();

        Self::match_segments(&pattern_parts, &event_parts)
    }

    fn match_segments(pattern: &[&str], event: &[&str]) -> bool {
        match (pattern.first(), event.first()) {
            (None, None) => true,
            (Some(&"**"), _) => true, // ** matches everything remaining
            (Some(&"*"), Some(_)) => Self::match_segments(&pattern[1..], &event[1..]),
            (Some(p), Some(e)) if *p == *e => Self::match_segments(&pattern[1..], &event[1..]),
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Subscriber handle for unsubscribing
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub String);

/// A subscription to specific event patterns
#[derive(Clone, Debug)]
pub struct Subscription {
    pub id: SubscriberId,
    pub patterns: Vec<EventPattern>,
    /// Only deliver events for this campaign when set
    pub campaign: Option<CampaignId>,
    pub description: String,
}

impl Subscription {
    pub fn new(
        id: impl Into<String>,
        patterns: Vec<EventPattern>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: SubscriberId(id.into()),
            patterns,
            campaign: None,
            description: description.into(),
        }
    }

    /// Restrict delivery to one campaign
    pub fn for_campaign(self, campaign: CampaignId) -> Self {
        Self {
            campaign: Some(campaign),
            ..self
        }
    }

    /// Check if any pattern matches the event name
    pub fn matches_name(&self, event_name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(event_name))
    }

    /// Check the event against both the campaign scope and the patterns
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(campaign) = &self.campaign {
            if event.campaign_id() != campaign {
                return false;
            }
        }
        self.matches_name(event.name())
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
