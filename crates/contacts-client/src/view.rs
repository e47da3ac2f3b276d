use crate::controller::{ContactsController, ContactsState};
use contacts_core::search::filter_contacts;
use contacts_core::{Contact, ContactField, ContactPayload};
use log::warn;
use std::collections::BTreeMap;

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];

/// One error message per invalid form field
pub type FormErrors = BTreeMap<ContactField, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: &str) -> Self {
        Self {
            message: message.to_owned(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_owned(),
            severity: Severity::Error,
        }
    }
}

/// The table and form state on top of a [`ContactsController`]
pub struct ContactsView {
    controller: ContactsController,
    search_query: String,
    page: usize,
    rows_per_page: usize,
    editing: Option<Contact>,
    adding: bool,
    form_errors: FormErrors,
    submitting: bool,
    notification: Option<Notification>,
}

impl ContactsView {
    pub fn new(controller: ContactsController) -> Self {
        Self {
            controller,
            search_query: String::new(),
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            editing: None,
            adding: false,
            form_errors: FormErrors::new(),
            submitting: false,
            notification: None,
        }
    }

    pub fn controller(&mut self) -> &mut ContactsController {
        &mut self.controller
    }

    pub fn state(&self) -> &ContactsState {
        self.controller.state()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn editing(&self) -> Option<&Contact> {
        self.editing.as_ref()
    }

    pub fn is_adding(&self) -> bool {
        self.adding
    }

    pub fn form_errors(&self) -> &FormErrors {
        &self.form_errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// The contacts matching the current search query
    pub fn filtered(&self) -> Vec<Contact> {
        filter_contacts(self.controller.contacts(), &self.search_query)
    }

    /// The filtered contacts on the current page
    pub fn visible_rows(&self) -> Vec<Contact> {
        self.filtered()
            .into_iter()
            .skip(self.page * self.rows_per_page)
            .take(self.rows_per_page)
            .collect()
    }

    /// The number of pages of the filtered contacts, at least 1
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(self.rows_per_page).max(1)
    }

    /// Jumps to the given page, clamped to the last page
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    /// Sets the rows per page and goes back to the first page. Returns false and changes
    /// nothing, if `rows` isn't one of [`ROWS_PER_PAGE_OPTIONS`].
    pub fn set_rows_per_page(&mut self, rows: usize) -> bool {
        if !ROWS_PER_PAGE_OPTIONS.contains(&rows) {
            warn!("Unsupported rows per page: {rows}");
            return false;
        }
        self.rows_per_page = rows;
        self.page = 0;
        true
    }

    /// Sets the search query and goes back to the first page
    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_owned();
        self.page = 0;
    }

    pub fn open_add(&mut self) {
        self.adding = true;
        self.form_errors.clear();
    }

    pub fn close_add(&mut self) {
        self.adding = false;
        self.form_errors.clear();
    }

    pub fn open_edit(&mut self, contact: Contact) {
        self.editing = Some(contact);
        self.form_errors.clear();
    }

    pub fn close_edit(&mut self) {
        self.editing = None;
        self.form_errors.clear();
    }

    /// Checks the form the same way the API does, an empty result means the form is valid
    pub fn validate_form(payload: &ContactPayload) -> FormErrors {
        payload
            .field_errors()
            .into_iter()
            .map(|e| (e.field(), e.to_string()))
            .collect()
    }

    /// Validates and sends the add form. Returns true, if the contact was created.
    pub async fn submit_add(&mut self, payload: &ContactPayload) -> bool {
        self.form_errors = Self::validate_form(payload);
        if !self.form_errors.is_empty() {
            return false;
        }

        self.submitting = true;
        let result = self.controller.add(payload).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.close_add();
                self.notification = Some(Notification::success("Contact added successfully!"));
                true
            }
            Err(_) => {
                // the form stays open, the error is in the controller state
                self.notification = Some(Notification::error("Error adding contact"));
                false
            }
        }
    }

    /// Validates and sends the edit form for the contact being edited. Returns true, if the
    /// contact was updated.
    pub async fn submit_edit(&mut self, payload: &ContactPayload) -> bool {
        let Some(id) = self.editing.as_ref().map(|c| c.id.clone()) else {
            warn!("Tried to submit the edit form without a contact being edited");
            return false;
        };
        self.form_errors = Self::validate_form(payload);
        if !self.form_errors.is_empty() {
            return false;
        }

        self.submitting = true;
        let updated = self.controller.update(&id, payload).await;
        self.submitting = false;

        if updated {
            self.close_edit();
            self.notification = Some(Notification::success("Contact updated successfully!"));
        } else {
            self.notification = Some(Notification::error("Error updating contact"));
        }
        updated
    }

    /// Deletes the contact with the given id. If that empties the current page, the previous
    /// page is shown.
    pub async fn delete(&mut self, id: &str) -> bool {
        let deleted = self.controller.delete(id).await;
        if deleted {
            if self.page > 0 && self.page >= self.page_count() {
                self.page -= 1;
            }
            self.notification = Some(Notification::success("Contact deleted successfully!"));
        } else {
            self.notification = Some(Notification::error("Error deleting contact"));
        }
        deleted
    }

    pub fn close_notification(&mut self) {
        self.notification = None;
    }
}
