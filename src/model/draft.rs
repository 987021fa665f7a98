use super::company::Company;
use super::user::{Address, User, UserId};

/// Editable form field of a [`UserDraft`], in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Name,
    Username,
    Email,
    Phone,
    Street,
    City,
    Company,
    Website,
}

impl DraftField {
    pub const ALL: [DraftField; 8] = [
        DraftField::Name,
        DraftField::Username,
        DraftField::Email,
        DraftField::Phone,
        DraftField::Street,
        DraftField::City,
        DraftField::Company,
        DraftField::Website,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Name",
            DraftField::Username => "Username",
            DraftField::Email => "Email",
            DraftField::Phone => "Phone",
            DraftField::Street => "Street Address",
            DraftField::City => "City",
            DraftField::Company => "Company Name (optional)",
            DraftField::Website => "Website (optional)",
        }
    }

    /// Form key as used by the error mapping (`street`, `city`, ...).
    pub fn key(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Username => "username",
            DraftField::Email => "email",
            DraftField::Phone => "phone",
            DraftField::Street => "street",
            DraftField::City => "city",
            DraftField::Company => "company",
            DraftField::Website => "website",
        }
    }
}

/// A user-shaped record under construction in a form.
///
/// `suite` and `zipcode` are not editable in the form but survive an edit
/// round-trip so the replacement record does not drop them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub company: String,
    pub website: String,
}

impl UserDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            company: user.company.name.clone(),
            website: user.website.clone(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Username => &self.username,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::Street => &self.address.street,
            DraftField::City => &self.address.city,
            DraftField::Company => &self.company,
            DraftField::Website => &self.website,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Username => &mut self.username,
            DraftField::Email => &mut self.email,
            DraftField::Phone => &mut self.phone,
            DraftField::Street => &mut self.address.street,
            DraftField::City => &mut self.address.city,
            DraftField::Company => &mut self.company,
            DraftField::Website => &mut self.website,
        }
    }

    /// Build the record submitted to the resource.
    pub fn to_user(&self, id: UserId) -> User {
        User {
            id,
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            website: self.website.clone(),
            address: self.address.clone(),
            company: Company::new(self.company.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_round_trip_keeps_hidden_address_fields() {
        let user = User {
            id: 4,
            name: "Patricia".to_string(),
            username: "Karianne".to_string(),
            email: "julianne@kory.org".to_string(),
            phone: "4935586584".to_string(),
            website: "kale.biz".to_string(),
            address: Address {
                street: "Hoeger Mall".to_string(),
                suite: "Apt. 692".to_string(),
                city: "South Elvis".to_string(),
                zipcode: "53919-4257".to_string(),
            },
            company: Company::new("Robel-Corkery"),
        };

        let mut draft = UserDraft::from_user(&user);
        draft.field_mut(DraftField::City).push_str(" North");
        let updated = draft.to_user(user.id);

        assert_eq!(updated.address.suite, "Apt. 692");
        assert_eq!(updated.address.city, "South Elvis North");
        assert_eq!(updated.company.name, "Robel-Corkery");
    }
}
