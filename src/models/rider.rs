use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::models::observer::Observer;
use crate::models::trip::Trip;
use crate::models::user::{Notification, User};

pub type SharedRider = Rc<RefCell<Rider>>;

#[derive(Debug, Clone)]
pub struct Rider {
    user: User,
}

impl Rider {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            user: User::new(id, name, contact),
        }
    }

    pub fn into_shared(self) -> SharedRider {
        Rc::new(RefCell::new(self))
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub(crate) fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }
}

impl Observer for Rider {
    fn on_update(&mut self, trip: &Trip) {
        debug!(
            rider_id = %self.user.id(),
            trip_id = %trip.id(),
            status = trip.status().as_str(),
            "rider notified of trip status change"
        );

        self.user.push_notification(Notification {
            trip_id: trip.id(),
            status: trip.status(),
        });
    }
}
