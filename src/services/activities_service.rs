use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::database::ActivityStore;
use crate::error::AppError;
use crate::models::Activity;

/// Whether `max_participants` gates signups. The school has always treated it
/// as advisory, so `Advisory` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapacityPolicy {
    #[default]
    Advisory,
    Enforced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

pub async fn list_activities(store: &ActivityStore) -> BTreeMap<String, Activity> {
    store.snapshot().await
}

pub async fn signup(
    store: &ActivityStore,
    policy: CapacityPolicy,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, AppError> {
    let outcome = store
        .update(activity_name, |activity| {
            if activity.has_participant(email) {
                return Err(AppError::AlreadySignedUp);
            }
            if policy == CapacityPolicy::Enforced && activity.is_full() {
                return Err(AppError::ActivityFull);
            }
            activity.participants.push(email.to_string());
            Ok(activity.participants.len())
        })
        .await
        .unwrap_or(Err(AppError::ActivityNotFound));

    match outcome {
        Ok(count) => {
            info!(activity = %activity_name, email = %email, participants = count, "signup accepted");
            Ok(Confirmation {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            Err(e)
        }
    }
}

pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<Confirmation, AppError> {
    let outcome = store
        .update(activity_name, |activity| {
            let Some(idx) = activity.participants.iter().position(|p| p == email) else {
                return Err(AppError::NotRegistered);
            };
            activity.participants.remove(idx);
            Ok(activity.participants.len())
        })
        .await
        .unwrap_or(Err(AppError::ActivityNotFound));

    match outcome {
        Ok(count) => {
            info!(activity = %activity_name, email = %email, participants = count, "unregister accepted");
            Ok(Confirmation {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "unregister rejected: {}", e);
            Err(e)
        }
    }
}
