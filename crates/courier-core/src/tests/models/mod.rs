mod contact_list;
mod user_document;
